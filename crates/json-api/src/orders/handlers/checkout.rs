//! Checkout Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// Checkout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutResponse {
    pub message: String,
    pub order_id: Uuid,
    pub total_amount: u64,
}

/// Checkout Handler
///
/// Converts the caller's cart into an order. Takes no body: the cart is the
/// input.
#[endpoint(
    tags("orders"),
    summary = "Checkout",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Cart is empty"),
        (status_code = StatusCode::CONFLICT, description = "Cart contents changed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let auth = depot.auth_context_or_401()?;

    let receipt = state
        .app
        .orders
        .checkout(auth)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CheckoutResponse {
        message: "Order placed successfully".to_string(),
        order_id: receipt.order.into(),
        total_amount: receipt.total_amount,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use stockyard_app::domain::orders::{
        MockOrdersService, OrdersServiceError, data::CheckoutReceipt, records::OrderUuid,
    };

    use crate::test_helpers::{TEST_BUYER, buyer_service, state_with_orders};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        buyer_service(
            state_with_orders(orders),
            Router::with_path("checkout").post(handler),
        )
    }

    #[tokio::test]
    async fn test_checkout_returns_order_id_and_total() -> TestResult {
        let order = OrderUuid::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_checkout()
            .once()
            .withf(|auth| *auth == TEST_BUYER)
            .return_once(move |_| {
                Ok(CheckoutReceipt {
                    order,
                    total_amount: 200_00,
                })
            });

        orders.expect_list_buyer_orders().never();
        orders.expect_list_farmer_sales().never();
        orders.expect_update_order_status().never();

        let mut res = TestClient::post("http://example.com/checkout")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: CheckoutResponse = res.take_json().await?;

        assert_eq!(body.message, "Order placed successfully");
        assert_eq!(body.order_id, order.into_uuid());
        assert_eq!(body.total_amount, 200_00);

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_empty_cart_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_checkout()
            .once()
            .return_once(|_| Err(OrdersServiceError::EmptyCart));

        orders.expect_list_buyer_orders().never();
        orders.expect_list_farmer_sales().never();
        orders.expect_update_order_status().never();

        let res = TestClient::post("http://example.com/checkout")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_race_returns_409() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_checkout()
            .once()
            .return_once(|_| Err(OrdersServiceError::Conflict));

        orders.expect_list_buyer_orders().never();
        orders.expect_list_farmer_sales().never();
        orders.expect_update_order_status().never();

        let res = TestClient::post("http://example.com/checkout")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
