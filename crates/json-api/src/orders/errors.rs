//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use stockyard_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::EmptyCart => StatusError::bad_request().brief("Cart is empty"),
        OrdersServiceError::NotFound => StatusError::not_found(),
        OrdersServiceError::Forbidden => StatusError::forbidden().brief("Not authorized"),
        OrdersServiceError::Conflict => {
            StatusError::conflict().brief("Cart contents changed, refresh and retry")
        }
        OrdersServiceError::AmountOverflow => {
            StatusError::bad_request().brief("Order total exceeds the supported range")
        }
        OrdersServiceError::Sql(source) => {
            error!("orders storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
