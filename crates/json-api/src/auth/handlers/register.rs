//! Register Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use stockyard_app::auth::models::{NewUser, UserRole, UserUuid};

use crate::{
    auth::{SessionResponse, errors::into_status_error},
    extensions::*,
    state::State,
};

/// Register Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub user_type: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Register Handler
#[endpoint(
    tags("auth"),
    summary = "Register",
    responses(
        (status_code = StatusCode::CREATED, description = "Account created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RegisterRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SessionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let required = [
        &request.email,
        &request.password,
        &request.first_name,
        &request.last_name,
    ];

    if required.iter().any(|field| field.is_empty()) {
        return Err(StatusError::bad_request().brief("Missing required fields"));
    }

    let role = request.user_type.parse::<UserRole>().map_err(|_| {
        StatusError::bad_request().brief("Invalid user type. Must be \"farmer\" or \"user\"")
    })?;

    let session = state
        .app
        .auth
        .register(NewUser {
            uuid: UserUuid::new(),
            email: request.email,
            password: request.password,
            first_name: request.first_name,
            last_name: request.last_name,
            role,
            phone: request.phone,
            address: request.address,
        })
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(SessionResponse {
        message: "User registered successfully".to_string(),
        access_token: session.token,
        user: session.user.into(),
    }))
}
