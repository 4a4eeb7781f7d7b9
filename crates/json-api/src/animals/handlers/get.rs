//! Get Animal Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockyard_app::domain::animals::records::AnimalRecord;

use crate::{animals::errors::into_status_error, extensions::*, state::State};

/// Animal Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AnimalResponse {
    /// The unique identifier of the listing
    pub id: Uuid,

    /// The owning farmer
    pub farmer_id: Uuid,

    pub name: String,

    pub breed: String,

    /// The price of the animal in minor currency units
    pub price: u64,

    /// Whether the animal is still for sale
    pub available: bool,

    pub created_at: String,

    pub updated_at: String,
}

impl From<AnimalRecord> for AnimalResponse {
    fn from(animal: AnimalRecord) -> Self {
        AnimalResponse {
            id: animal.uuid.into(),
            farmer_id: animal.farmer_uuid.into(),
            name: animal.name,
            breed: animal.breed,
            price: animal.price,
            available: animal.available,
            created_at: animal.created_at.to_string(),
            updated_at: animal.updated_at.to_string(),
        }
    }
}

/// Get Animal Handler
///
/// Returns a single listing.
#[endpoint(
    tags("animals"),
    summary = "Get Animal",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    animal: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<AnimalResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let animal = state
        .app
        .animals
        .get_animal(animal.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(animal.into()))
}
