//! Create Animal Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use stockyard_app::domain::animals::{data::NewAnimal, records::AnimalUuid};

use crate::{
    animals::{errors::into_status_error, get::AnimalResponse},
    extensions::*,
    state::State,
};

/// Create Animal Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateAnimalRequest {
    pub name: String,
    pub breed: String,
    pub price: u64,
}

/// Create Animal Handler
#[endpoint(
    tags("animals"),
    summary = "Create Animal",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Animal created"),
        (status_code = StatusCode::FORBIDDEN, description = "Caller is not a farmer"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateAnimalRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<AnimalResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let auth = depot.auth_context_or_401()?;
    let request = json.into_inner();

    if request.name.is_empty() || request.breed.is_empty() {
        return Err(StatusError::bad_request().brief("Name and breed are required"));
    }

    let animal = state
        .app
        .animals
        .create_animal(
            auth,
            NewAnimal {
                uuid: AnimalUuid::new(),
                name: request.name,
                breed: request.breed,
                price: request.price,
            },
        )
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/animals/{}", animal.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(animal.into()))
}
