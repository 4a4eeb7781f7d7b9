//! Cart Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockyard_app::domain::carts::records::CartLineRecord;

use crate::{extensions::*, state::State};

/// Cart line listing summary
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartAnimalResponse {
    pub id: Uuid,
    pub name: String,
    pub breed: String,
    pub price: u64,
}

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    pub id: Uuid,
    pub animal: CartAnimalResponse,
    pub quantity: u32,
    pub subtotal: u64,
}

impl From<CartLineRecord> for CartItemResponse {
    fn from(line: CartLineRecord) -> Self {
        let subtotal = line.subtotal();

        CartItemResponse {
            id: line.uuid.into(),
            animal: CartAnimalResponse {
                id: line.animal_uuid.into(),
                name: line.animal_name,
                breed: line.animal_breed,
                price: line.price,
            },
            quantity: line.quantity,
            subtotal,
        }
    }
}

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    pub cart_items: Vec<CartItemResponse>,
}

/// Cart Index Handler
///
/// Returns the caller's cart lines with listing details.
#[endpoint(tags("cart"), summary = "Get Cart", security(("bearer_auth" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let auth = depot.auth_context_or_401()?;

    let lines = state
        .app
        .carts
        .list_cart(auth)
        .await
        .or_500("failed to fetch cart")?;

    Ok(Json(CartResponse {
        cart_items: lines.into_iter().map(Into::into).collect(),
    }))
}
