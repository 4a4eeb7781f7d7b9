//! Animal Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{animals::get::AnimalResponse, extensions::*, state::State};

/// Animals Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AnimalsResponse {
    /// The list of available animals
    pub animals: Vec<AnimalResponse>,
}

/// Animal Index Handler
///
/// Returns all animals currently for sale.
#[endpoint(
    tags("animals"),
    summary = "List Animals",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<AnimalsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let animals = state
        .app
        .animals
        .list_animals()
        .await
        .or_500("failed to fetch animals")?;

    Ok(Json(AnimalsResponse {
        animals: animals.into_iter().map(Into::into).collect(),
    }))
}
