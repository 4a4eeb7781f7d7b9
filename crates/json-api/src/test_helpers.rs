//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use stockyard_app::{
    auth::{
        MockAuthService,
        models::{AuthContext, AuthSession, NewUser, UserRecord, UserRole, UserUuid},
    },
    context::AppContext,
    domain::{
        animals::{MockAnimalsService, records::{AnimalRecord, AnimalUuid}},
        carts::MockCartsService,
        orders::MockOrdersService,
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_BUYER: AuthContext = AuthContext {
    user: UserUuid::from_uuid(Uuid::nil()),
    role: UserRole::User,
};

pub(crate) const TEST_FARMER: AuthContext = AuthContext {
    user: UserUuid::from_uuid(Uuid::from_u128(1)),
    role: UserRole::Farmer,
};

#[salvo::handler]
pub(crate) async fn inject_buyer(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_auth_context(TEST_BUYER);
    ctrl.call_next(req, depot, res).await;
}

#[salvo::handler]
pub(crate) async fn inject_farmer(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_auth_context(TEST_FARMER);
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn new_user(email: &str, role: UserRole) -> NewUser {
    NewUser {
        uuid: UserUuid::new(),
        email: email.to_string(),
        password: "password123".to_string(),
        first_name: "Test".to_string(),
        last_name: "Account".to_string(),
        role,
        phone: None,
        address: None,
    }
}

pub(crate) fn make_user(uuid: UserUuid, email: &str) -> UserRecord {
    UserRecord {
        uuid,
        email: email.to_string(),
        first_name: "Test".to_string(),
        last_name: "Account".to_string(),
        role: UserRole::User,
        phone: None,
        address: None,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_session(user: &NewUser) -> AuthSession {
    AuthSession {
        token: "test-token".to_string(),
        user: UserRecord {
            uuid: user.uuid,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: user.role,
            phone: user.phone.clone(),
            address: user.address.clone(),
            created_at: Timestamp::UNIX_EPOCH,
        },
    }
}

pub(crate) fn make_animal(uuid: AnimalUuid, farmer: UserUuid, price: u64) -> AnimalRecord {
    AnimalRecord {
        uuid,
        farmer_uuid: farmer,
        name: "Daisy".to_string(),
        breed: "Holstein".to_string(),
        price,
        available: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_register().never();
    auth.expect_login().never();
    auth.expect_authenticate_bearer().never();
    auth.expect_profile().never();

    auth
}

fn strict_animals_mock() -> MockAnimalsService {
    let mut animals = MockAnimalsService::new();

    animals.expect_list_animals().never();
    animals.expect_get_animal().never();
    animals.expect_create_animal().never();
    animals.expect_update_animal().never();
    animals.expect_delete_animal().never();

    animals
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_list_cart().never();
    carts.expect_add_item().never();
    carts.expect_update_item().never();
    carts.expect_remove_item().never();

    carts
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_checkout().never();
    orders.expect_list_buyer_orders().never();
    orders.expect_list_farmer_sales().never();
    orders.expect_update_order_status().never();

    orders
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        auth: Arc::new(auth),
        animals: Arc::new(strict_animals_mock()),
        carts: Arc::new(strict_carts_mock()),
        orders: Arc::new(strict_orders_mock()),
    }))
}

pub(crate) fn state_with_animals(animals: MockAnimalsService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        auth: Arc::new(strict_auth_mock()),
        animals: Arc::new(animals),
        carts: Arc::new(strict_carts_mock()),
        orders: Arc::new(strict_orders_mock()),
    }))
}

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        auth: Arc::new(strict_auth_mock()),
        animals: Arc::new(strict_animals_mock()),
        carts: Arc::new(carts),
        orders: Arc::new(strict_orders_mock()),
    }))
}

pub(crate) fn state_with_orders(orders: MockOrdersService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        auth: Arc::new(strict_auth_mock()),
        animals: Arc::new(strict_animals_mock()),
        carts: Arc::new(strict_carts_mock()),
        orders: Arc::new(orders),
    }))
}

/// A service with no authenticated caller, for the public routes.
pub(crate) fn public_service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

/// A service whose caller is [`TEST_BUYER`].
pub(crate) fn buyer_service(state: Arc<State>, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(inject_buyer)
            .push(route),
    )
}

/// A service whose caller is [`TEST_FARMER`].
pub(crate) fn farmer_service(state: Arc<State>, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(inject_farmer)
            .push(route),
    )
}
