//! My Sales Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockyard_app::domain::orders::records::{FarmerSale, FarmerSaleLine};

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// Buyer contact shown to the seller.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SaleBuyerResponse {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// One of the caller's sold lines. Unlike the buyer view, lines here carry
/// no id and the animal name sits flat on the item.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FarmerSaleItemResponse {
    pub animal_name: String,
    pub quantity: u32,
    pub price: u64,
    pub subtotal: u64,
}

impl From<FarmerSaleLine> for FarmerSaleItemResponse {
    fn from(line: FarmerSaleLine) -> Self {
        let subtotal = line.subtotal();

        FarmerSaleItemResponse {
            animal_name: line.animal_name,
            quantity: line.quantity,
            price: line.price,
            subtotal,
        }
    }
}

/// One order containing the caller's listings, filtered to their lines.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FarmerSaleResponse {
    pub id: Uuid,
    pub total_amount: u64,
    pub status: String,
    pub created_at: String,
    pub user: SaleBuyerResponse,
    pub order_items: Vec<FarmerSaleItemResponse>,
}

impl From<FarmerSale> for FarmerSaleResponse {
    fn from(sale: FarmerSale) -> Self {
        FarmerSaleResponse {
            id: sale.uuid.into(),
            total_amount: sale.total_amount,
            status: sale.status.as_str().to_string(),
            created_at: sale.created_at.to_string(),
            user: SaleBuyerResponse {
                first_name: sale.buyer.first_name,
                last_name: sale.buyer.last_name,
                email: sale.buyer.email,
            },
            order_items: sale.items.into_iter().map(Into::into).collect(),
        }
    }
}

/// My Sales Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FarmerSalesResponse {
    pub orders: Vec<FarmerSaleResponse>,
}

/// My Sales Handler
///
/// Returns orders containing the calling farmer's listings, newest first,
/// filtered to the caller's own lines.
#[endpoint(
    tags("orders"),
    summary = "My Sales",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Sales list"),
        (status_code = StatusCode::FORBIDDEN, description = "Caller is not a farmer"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<FarmerSalesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let auth = depot.auth_context_or_401()?;

    let sales = state
        .app
        .orders
        .list_farmer_sales(auth)
        .await
        .map_err(into_status_error)?;

    Ok(Json(FarmerSalesResponse {
        orders: sales.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use stockyard_app::domain::orders::{
        MockOrdersService, OrdersServiceError,
        records::{BuyerContact, FarmerSale, FarmerSaleLine, OrderStatus, OrderUuid},
    };

    use crate::test_helpers::{
        TEST_FARMER, buyer_service, farmer_service, state_with_orders,
    };

    use super::*;

    fn make_sale(uuid: OrderUuid) -> FarmerSale {
        FarmerSale {
            uuid,
            total_amount: 200_00,
            status: OrderStatus::Pending,
            created_at: Timestamp::UNIX_EPOCH,
            buyer: BuyerContact {
                first_name: "Alice".to_string(),
                last_name: "Doe".to_string(),
                email: "alice@example.com".to_string(),
            },
            items: vec![FarmerSaleLine {
                animal_name: "Daisy".to_string(),
                quantity: 2,
                price: 50_00,
            }],
        }
    }

    #[tokio::test]
    async fn test_sales_carry_buyer_and_filtered_items() -> TestResult {
        let uuid = OrderUuid::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_list_farmer_sales()
            .once()
            .withf(|auth| *auth == TEST_FARMER)
            .return_once(move |_| Ok(vec![make_sale(uuid)]));

        orders.expect_checkout().never();
        orders.expect_list_buyer_orders().never();
        orders.expect_update_order_status().never();

        let service = farmer_service(
            state_with_orders(orders),
            Router::with_path("sales/mine").get(handler),
        );

        let response: FarmerSalesResponse = TestClient::get("http://example.com/sales/mine")
            .send(&service)
            .await
            .take_json()
            .await?;

        assert_eq!(response.orders.len(), 1);

        let sale = &response.orders[0];

        assert_eq!(sale.id, uuid.into_uuid());
        assert_eq!(sale.user.email, "alice@example.com");
        assert_eq!(sale.order_items.len(), 1);
        assert_eq!(sale.order_items[0].animal_name, "Daisy");
        assert_eq!(sale.order_items[0].subtotal, 100_00);

        Ok(())
    }

    #[tokio::test]
    async fn test_sales_by_non_farmer_returns_403() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_list_farmer_sales()
            .once()
            .return_once(|_| Err(OrdersServiceError::Forbidden));

        orders.expect_checkout().never();
        orders.expect_list_buyer_orders().never();
        orders.expect_update_order_status().never();

        let service = buyer_service(
            state_with_orders(orders),
            Router::with_path("sales/mine").get(handler),
        );

        let res = TestClient::get("http://example.com/sales/mine")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
