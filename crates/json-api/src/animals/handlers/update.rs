//! Update Animal Handler

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

use stockyard_app::domain::animals::data::AnimalUpdate;

use crate::{
    animals::{errors::into_status_error, get::AnimalResponse},
    extensions::*,
    state::State,
};

/// Update Animal Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateAnimalRequest {
    pub name: String,
    pub breed: String,
    pub price: u64,
    pub available: bool,
}

impl From<UpdateAnimalRequest> for AnimalUpdate {
    fn from(request: UpdateAnimalRequest) -> Self {
        AnimalUpdate {
            name: request.name,
            breed: request.breed,
            price: request.price,
            available: request.available,
        }
    }
}

/// Update Animal Handler
#[endpoint(
    tags("animals"),
    summary = "Update Animal",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Animal updated"),
        (status_code = StatusCode::FORBIDDEN, description = "Caller does not own this listing"),
        (status_code = StatusCode::NOT_FOUND, description = "Animal not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    animal: PathParam<Uuid>,
    json: JsonBody<UpdateAnimalRequest>,
    depot: &mut Depot,
) -> Result<Json<AnimalResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let auth = depot.auth_context_or_401()?;

    let updated = state
        .app
        .animals
        .update_animal(auth, animal.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}
