//! Profile Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    auth::{UserResponse, errors::into_status_error},
    extensions::*,
    state::State,
};

/// Profile Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProfileResponse {
    pub user: UserResponse,
}

/// Profile Handler
///
/// Returns the authenticated caller's account.
#[endpoint(
    tags("auth"),
    summary = "Get Profile",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProfileResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let auth = depot.auth_context_or_401()?;

    let user = state
        .app
        .auth
        .profile(auth.user)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProfileResponse { user: user.into() }))
}
