//! Auth Errors

use salvo::http::StatusError;
use tracing::error;

use stockyard_app::auth::AuthServiceError;

pub(crate) fn into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::EmailTaken => {
            StatusError::bad_request().brief("User with this email already exists")
        }
        AuthServiceError::InvalidCredentials => {
            StatusError::unauthorized().brief("Invalid email or password")
        }
        AuthServiceError::NotFound => StatusError::not_found(),
        AuthServiceError::Token(_) => {
            StatusError::unauthorized().brief("Invalid or expired token")
        }
        AuthServiceError::PasswordHash => {
            error!("failed to hash password");

            StatusError::internal_server_error()
        }
        AuthServiceError::Sql(source) => {
            error!("auth storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
