//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use stockyard_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::NotFound => StatusError::not_found(),
        CartsServiceError::AnimalUnavailable => {
            StatusError::bad_request().brief("Animal is no longer available")
        }
        CartsServiceError::InvalidQuantity => {
            StatusError::bad_request().brief("Quantity must be positive")
        }
        CartsServiceError::InvalidReference => {
            StatusError::bad_request().brief("Invalid cart payload")
        }
        CartsServiceError::Sql(source) => {
            error!("cart storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
