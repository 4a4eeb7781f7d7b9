//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockyard_app::domain::carts::{data::NewCartItem, records::{CartItemRecord, CartItemUuid}};

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddCartItemRequest {
    pub animal_id: Uuid,
    pub quantity: u32,
}

/// Cart Item Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemCreatedResponse {
    pub id: Uuid,
    pub animal_id: Uuid,
    pub quantity: u32,
}

impl From<CartItemRecord> for CartItemCreatedResponse {
    fn from(item: CartItemRecord) -> Self {
        CartItemCreatedResponse {
            id: item.uuid.into(),
            animal_id: item.animal_uuid.into(),
            quantity: item.quantity,
        }
    }
}

/// Add Cart Item Handler
#[endpoint(
    tags("cart"),
    summary = "Add Cart Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Cart item added"),
        (status_code = StatusCode::NOT_FOUND, description = "Animal not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartItemCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let auth = depot.auth_context_or_401()?;
    let request = json.into_inner();

    let item = state
        .app
        .carts
        .add_item(
            auth,
            NewCartItem {
                uuid: CartItemUuid::new(),
                animal_uuid: request.animal_id.into(),
                quantity: request.quantity,
            },
        )
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(item.into()))
}
