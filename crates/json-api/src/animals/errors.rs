//! Animal Errors

use salvo::http::StatusError;
use tracing::error;

use stockyard_app::domain::animals::AnimalsServiceError;

pub(crate) fn into_status_error(error: AnimalsServiceError) -> StatusError {
    match error {
        AnimalsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Animal already exists")
        }
        AnimalsServiceError::NotFound => StatusError::not_found(),
        AnimalsServiceError::Forbidden => {
            StatusError::forbidden().brief("Not authorized to manage this listing")
        }
        AnimalsServiceError::InvalidReference
        | AnimalsServiceError::MissingRequiredData
        | AnimalsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid animal payload")
        }
        AnimalsServiceError::InvalidPrice(_) => {
            StatusError::bad_request().brief("Invalid price value")
        }
        AnimalsServiceError::Sql(source) => {
            error!("animals storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
