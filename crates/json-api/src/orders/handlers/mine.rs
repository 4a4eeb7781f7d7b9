//! My Orders Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockyard_app::domain::orders::records::{BuyerOrder, BuyerOrderLine};

use crate::{extensions::*, state::State};

/// Listing details shown on a purchased line.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemAnimalResponse {
    pub name: String,
    pub breed: String,
}

/// One line of a purchase.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BuyerOrderItemResponse {
    pub id: Uuid,
    pub animal: OrderItemAnimalResponse,
    pub quantity: u32,
    pub price: u64,
    pub subtotal: u64,
}

impl From<BuyerOrderLine> for BuyerOrderItemResponse {
    fn from(line: BuyerOrderLine) -> Self {
        let subtotal = line.subtotal();

        BuyerOrderItemResponse {
            id: line.uuid.into(),
            animal: OrderItemAnimalResponse {
                name: line.animal_name,
                breed: line.animal_breed,
            },
            quantity: line.quantity,
            price: line.price,
            subtotal,
        }
    }
}

/// One purchase with its full line set.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BuyerOrderResponse {
    pub id: Uuid,
    pub total_amount: u64,
    pub status: String,
    pub created_at: String,
    pub order_items: Vec<BuyerOrderItemResponse>,
}

impl From<BuyerOrder> for BuyerOrderResponse {
    fn from(order: BuyerOrder) -> Self {
        BuyerOrderResponse {
            id: order.uuid.into(),
            total_amount: order.total_amount,
            status: order.status.as_str().to_string(),
            created_at: order.created_at.to_string(),
            order_items: order.items.into_iter().map(Into::into).collect(),
        }
    }
}

/// My Orders Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BuyerOrdersResponse {
    pub orders: Vec<BuyerOrderResponse>,
}

/// My Orders Handler
///
/// Returns the caller's purchases, newest first.
#[endpoint(
    tags("orders"),
    summary = "My Orders",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<BuyerOrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let auth = depot.auth_context_or_401()?;

    let orders = state
        .app
        .orders
        .list_buyer_orders(auth)
        .await
        .or_500("failed to fetch orders")?;

    Ok(Json(BuyerOrdersResponse {
        orders: orders.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use stockyard_app::domain::orders::{
        MockOrdersService,
        records::{BuyerOrder, BuyerOrderLine, OrderItemUuid, OrderStatus, OrderUuid},
    };

    use crate::test_helpers::{TEST_BUYER, buyer_service, state_with_orders};

    use super::*;

    fn make_order(uuid: OrderUuid) -> BuyerOrder {
        BuyerOrder {
            uuid,
            total_amount: 200_00,
            status: OrderStatus::Pending,
            created_at: Timestamp::UNIX_EPOCH,
            items: vec![
                BuyerOrderLine {
                    uuid: OrderItemUuid::new(),
                    animal_name: "Daisy".to_string(),
                    animal_breed: "Holstein".to_string(),
                    quantity: 1,
                    price: 100_00,
                },
                BuyerOrderLine {
                    uuid: OrderItemUuid::new(),
                    animal_name: "Bella".to_string(),
                    animal_breed: "Jersey".to_string(),
                    quantity: 2,
                    price: 50_00,
                },
            ],
        }
    }

    fn make_service(orders: MockOrdersService) -> Service {
        buyer_service(
            state_with_orders(orders),
            Router::with_path("orders/mine").get(handler),
        )
    }

    #[tokio::test]
    async fn test_orders_include_every_line_with_subtotals() -> TestResult {
        let uuid = OrderUuid::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_list_buyer_orders()
            .once()
            .withf(|auth| *auth == TEST_BUYER)
            .return_once(move |_| Ok(vec![make_order(uuid)]));

        orders.expect_checkout().never();
        orders.expect_list_farmer_sales().never();
        orders.expect_update_order_status().never();

        let response: BuyerOrdersResponse = TestClient::get("http://example.com/orders/mine")
            .send(&make_service(orders))
            .await
            .take_json()
            .await?;

        assert_eq!(response.orders.len(), 1);

        let order = &response.orders[0];

        assert_eq!(order.id, uuid.into_uuid());
        assert_eq!(order.status, "pending");
        assert_eq!(order.total_amount, 200_00);
        assert_eq!(order.order_items.len(), 2);
        assert_eq!(order.order_items[0].animal.name, "Daisy");
        assert_eq!(order.order_items[0].subtotal, 100_00);
        assert_eq!(order.order_items[1].quantity, 2);
        assert_eq!(order.order_items[1].subtotal, 100_00);

        Ok(())
    }

    #[tokio::test]
    async fn test_no_orders_returns_empty_list() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_list_buyer_orders()
            .once()
            .return_once(|_| Ok(vec![]));

        orders.expect_checkout().never();
        orders.expect_list_farmer_sales().never();
        orders.expect_update_order_status().never();

        let response: BuyerOrdersResponse = TestClient::get("http://example.com/orders/mine")
            .send(&make_service(orders))
            .await
            .take_json()
            .await?;

        assert!(response.orders.is_empty());

        Ok(())
    }
}
