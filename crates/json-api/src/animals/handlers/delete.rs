//! Delete Animal Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{animals::errors::into_status_error, extensions::*, state::State};

/// Delete Animal Handler
#[endpoint(
    tags("animals"),
    summary = "Delete Animal",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Animal deleted"),
        (status_code = StatusCode::FORBIDDEN, description = "Caller does not own this listing"),
        (status_code = StatusCode::NOT_FOUND, description = "Animal not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    animal: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let auth = depot.auth_context_or_401()?;

    state
        .app
        .animals
        .delete_animal(auth, animal.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}
