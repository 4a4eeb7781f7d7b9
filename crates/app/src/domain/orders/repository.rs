//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::{
    auth::models::UserUuid,
    domain::{
        animals::{bind_amount, records::AnimalUuid, try_get_amount},
        carts::{bind_quantity, try_get_quantity},
        orders::{
            data::CheckoutLine,
            records::{
                BuyerContact, BuyerOrderLine, FarmerSale, FarmerSaleLine, OrderItemUuid,
                OrderRecord, OrderStatus, OrderUuid,
            },
        },
    },
};

const LOCK_CART_LINES_SQL: &str = include_str!("sql/lock_cart_lines.sql");
const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const CREATE_ORDER_ITEM_SQL: &str = include_str!("sql/create_order_item.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const ORDER_HAS_SELLER_SQL: &str = include_str!("sql/order_has_seller.sql");
const UPDATE_ORDER_STATUS_SQL: &str = include_str!("sql/update_order_status.sql");
const LIST_BUYER_ORDERS_SQL: &str = include_str!("sql/list_buyer_orders.sql");
const LIST_BUYER_ORDER_LINES_SQL: &str = include_str!("sql/list_buyer_order_lines.sql");
const LIST_FARMER_ORDERS_SQL: &str = include_str!("sql/list_farmer_orders.sql");
const LIST_FARMER_ORDER_LINES_SQL: &str = include_str!("sql/list_farmer_order_lines.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Read the buyer's cart lines with each listing's current price,
    /// taking row locks on the listings so competing checkouts serialize.
    pub(crate) async fn lock_cart_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        buyer: UserUuid,
    ) -> Result<Vec<CheckoutLine>, sqlx::Error> {
        query_as::<Postgres, CheckoutLine>(LOCK_CART_LINES_SQL)
            .bind(buyer.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        buyer: UserUuid,
        total_amount: u64,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(buyer.into_uuid())
            .bind(bind_amount(total_amount, "total_amount")?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_order_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        lines: &[CheckoutLine],
    ) -> Result<(), sqlx::Error> {
        for line in lines {
            query(CREATE_ORDER_ITEM_SQL)
                .bind(OrderItemUuid::new().into_uuid())
                .bind(order.into_uuid())
                .bind(line.animal_uuid.into_uuid())
                .bind(bind_quantity(line.quantity, "quantity")?)
                .bind(bind_amount(line.price, "price")?)
                .execute(&mut **tx)
                .await?;
        }

        Ok(())
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Whether the farmer owns the listing behind at least one line of the
    /// order.
    pub(crate) async fn order_has_seller(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        farmer: UserUuid,
    ) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, bool>(ORDER_HAS_SELLER_SQL)
            .bind(order.into_uuid())
            .bind(farmer.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_order_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_ORDER_STATUS_SQL)
            .bind(order.into_uuid())
            .bind(status.as_str())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn list_buyer_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        buyer: UserUuid,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_BUYER_ORDERS_SQL)
            .bind(buyer.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_buyer_order_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        buyer: UserUuid,
    ) -> Result<Vec<BuyerOrderLineRow>, sqlx::Error> {
        query_as::<Postgres, BuyerOrderLineRow>(LIST_BUYER_ORDER_LINES_SQL)
            .bind(buyer.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// Distinct orders containing at least one of the farmer's listings,
    /// annotated with the buyer's contact details. Items are filled in by
    /// the service from [`Self::list_farmer_order_lines`].
    pub(crate) async fn list_farmer_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        farmer: UserUuid,
    ) -> Result<Vec<FarmerSale>, sqlx::Error> {
        query_as::<Postgres, FarmerSale>(LIST_FARMER_ORDERS_SQL)
            .bind(farmer.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_farmer_order_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        farmer: UserUuid,
    ) -> Result<Vec<FarmerSaleLineRow>, sqlx::Error> {
        query_as::<Postgres, FarmerSaleLineRow>(LIST_FARMER_ORDER_LINES_SQL)
            .bind(farmer.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }
}

/// A buyer-projection line together with the order it belongs to.
#[derive(Debug, Clone)]
pub(crate) struct BuyerOrderLineRow {
    pub(crate) order_uuid: OrderUuid,
    pub(crate) line: BuyerOrderLine,
}

/// A farmer-projection line together with the order it belongs to.
#[derive(Debug, Clone)]
pub(crate) struct FarmerSaleLineRow {
    pub(crate) order_uuid: OrderUuid,
    pub(crate) line: FarmerSaleLine,
}

pub(crate) fn try_get_status(row: &PgRow, col: &str) -> Result<OrderStatus, sqlx::Error> {
    let status: String = row.try_get(col)?;

    status.parse().map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            buyer_uuid: UserUuid::from_uuid(row.try_get("buyer_uuid")?),
            total_amount: try_get_amount(row, "total_amount")?,
            status: try_get_status(row, "status")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for CheckoutLine {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            animal_uuid: AnimalUuid::from_uuid(row.try_get("animal_uuid")?),
            quantity: try_get_quantity(row, "quantity")?,
            price: try_get_amount(row, "price")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for BuyerOrderLineRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            order_uuid: OrderUuid::from_uuid(row.try_get("order_uuid")?),
            line: BuyerOrderLine {
                uuid: OrderItemUuid::from_uuid(row.try_get("uuid")?),
                animal_name: row.try_get("animal_name")?,
                animal_breed: row.try_get("animal_breed")?,
                quantity: try_get_quantity(row, "quantity")?,
                price: try_get_amount(row, "price")?,
            },
        })
    }
}

impl<'r> FromRow<'r, PgRow> for FarmerSale {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            total_amount: try_get_amount(row, "total_amount")?,
            status: try_get_status(row, "status")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            buyer: BuyerContact {
                first_name: row.try_get("first_name")?,
                last_name: row.try_get("last_name")?,
                email: row.try_get("email")?,
            },
            items: Vec::new(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for FarmerSaleLineRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            order_uuid: OrderUuid::from_uuid(row.try_get("order_uuid")?),
            line: FarmerSaleLine {
                animal_name: row.try_get("animal_name")?,
                quantity: try_get_quantity(row, "quantity")?,
                price: try_get_amount(row, "price")?,
            },
        })
    }
}
