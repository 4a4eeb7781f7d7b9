//! Update Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    carts::{create::CartItemCreatedResponse, errors::into_status_error},
    extensions::*,
    state::State,
};

/// Update Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemRequest {
    pub quantity: u32,
}

/// Update Cart Item Handler
#[endpoint(
    tags("cart"),
    summary = "Update Cart Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart item updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    item: PathParam<Uuid>,
    json: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartItemCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let auth = depot.auth_context_or_401()?;

    let updated = state
        .app
        .carts
        .update_item(auth, item.into_inner().into(), json.into_inner().quantity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use stockyard_app::domain::{
        animals::records::AnimalUuid,
        carts::{
            CartsServiceError, MockCartsService,
            records::{CartItemRecord, CartItemUuid},
        },
    };

    use crate::test_helpers::{TEST_BUYER, buyer_service, state_with_carts};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        buyer_service(
            state_with_carts(carts),
            Router::with_path("cart/{item}").put(handler),
        )
    }

    #[tokio::test]
    async fn test_update_item_replaces_quantity() -> TestResult {
        let item = CartItemUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_update_item()
            .once()
            .withf(move |auth, i, quantity| {
                *auth == TEST_BUYER && *i == item && *quantity == 5
            })
            .return_once(move |auth, i, quantity| {
                Ok(CartItemRecord {
                    uuid: i,
                    user_uuid: auth.user,
                    animal_uuid: AnimalUuid::new(),
                    quantity,
                    created_at: Timestamp::UNIX_EPOCH,
                    updated_at: Timestamp::UNIX_EPOCH,
                })
            });

        carts.expect_list_cart().never();
        carts.expect_add_item().never();
        carts.expect_remove_item().never();

        let mut res = TestClient::put(format!("http://example.com/cart/{item}"))
            .json(&json!({ "quantity": 5 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: CartItemCreatedResponse = res.take_json().await?;

        assert_eq!(body.quantity, 5);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_item_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_update_item()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::NotFound));

        carts.expect_list_cart().never();
        carts.expect_add_item().never();
        carts.expect_remove_item().never();

        let res = TestClient::put(format!("http://example.com/cart/{}", CartItemUuid::new()))
            .json(&json!({ "quantity": 5 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
