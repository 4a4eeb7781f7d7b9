//! Update Order Status Handler

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

use stockyard_app::domain::orders::records::OrderStatus;

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// Update Order Status Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateOrderStatusRequest {
    pub status: String,
}

/// Update Order Status Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderStatusUpdatedResponse {
    pub message: String,
}

/// Update Order Status Handler
///
/// Sets an order's status. Any farmer selling at least one line in the
/// order may call this; the status applies to the whole order.
#[endpoint(
    tags("orders"),
    summary = "Update Order Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Status updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status value"),
        (status_code = StatusCode::FORBIDDEN, description = "Caller is not a seller in this order"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<UpdateOrderStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderStatusUpdatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let auth = depot.auth_context_or_401()?;

    let status = json
        .into_inner()
        .status
        .parse::<OrderStatus>()
        .map_err(|_| StatusError::bad_request().brief("Unknown order status"))?;

    state
        .app
        .orders
        .update_order_status(auth, order.into_inner().into(), status)
        .await
        .map_err(into_status_error)?;

    Ok(Json(OrderStatusUpdatedResponse {
        message: "Order status updated".to_string(),
    }))
}
