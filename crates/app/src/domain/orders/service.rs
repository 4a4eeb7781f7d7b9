//! Orders service: checkout, role-scoped projections, and status updates.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{
    auth::models::{AuthContext, UserRole},
    database::Db,
    domain::{
        animals::PgAnimalsRepository,
        carts::PgCartItemsRepository,
        orders::{
            data::CheckoutReceipt,
            errors::OrdersServiceError,
            records::{BuyerOrder, BuyerOrderLine, FarmerSale, FarmerSaleLine, OrderStatus, OrderUuid},
            repository::PgOrdersRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
    animals_repository: PgAnimalsRepository,
    cart_items_repository: PgCartItemsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
            animals_repository: PgAnimalsRepository::new(),
            cart_items_repository: PgCartItemsRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn checkout(&self, auth: AuthContext) -> Result<CheckoutReceipt, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let lines = self.repository.lock_cart_lines(&mut tx, auth.user).await?;

        if lines.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        let total_amount = lines.iter().try_fold(0u64, |acc, line| {
            line.price
                .checked_mul(u64::from(line.quantity))
                .and_then(|line_total| acc.checked_add(line_total))
                .ok_or(OrdersServiceError::AmountOverflow)
        })?;

        if i64::try_from(total_amount).is_err() {
            return Err(OrdersServiceError::AmountOverflow);
        }

        let order = self
            .repository
            .create_order(&mut tx, OrderUuid::new(), auth.user, total_amount)
            .await?;

        self.repository
            .create_order_items(&mut tx, order.uuid, &lines)
            .await?;

        // Each listing is a single animal: flip it unavailable no matter the
        // quantity ordered. A zero-row update means another checkout already
        // sold it, and the whole transaction rolls back.
        for line in &lines {
            let flipped = self
                .animals_repository
                .mark_unavailable(&mut tx, line.animal_uuid)
                .await?;

            if flipped == 0 {
                return Err(OrdersServiceError::Conflict);
            }
        }

        self.cart_items_repository
            .clear_cart(&mut tx, auth.user)
            .await?;

        tx.commit().await?;

        debug!(order = %order.uuid, total_amount, "checkout committed");

        Ok(CheckoutReceipt {
            order: order.uuid,
            total_amount: order.total_amount,
        })
    }

    async fn list_buyer_orders(
        &self,
        auth: AuthContext,
    ) -> Result<Vec<BuyerOrder>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.repository.list_buyer_orders(&mut tx, auth.user).await?;
        let line_rows = self
            .repository
            .list_buyer_order_lines(&mut tx, auth.user)
            .await?;

        tx.commit().await?;

        let mut lines_by_order: FxHashMap<OrderUuid, Vec<BuyerOrderLine>> = FxHashMap::default();

        for row in line_rows {
            lines_by_order.entry(row.order_uuid).or_default().push(row.line);
        }

        Ok(orders
            .into_iter()
            .map(|order| BuyerOrder {
                items: lines_by_order.remove(&order.uuid).unwrap_or_default(),
                uuid: order.uuid,
                total_amount: order.total_amount,
                status: order.status,
                created_at: order.created_at,
            })
            .collect())
    }

    async fn list_farmer_sales(
        &self,
        auth: AuthContext,
    ) -> Result<Vec<FarmerSale>, OrdersServiceError> {
        if auth.role != UserRole::Farmer {
            return Err(OrdersServiceError::Forbidden);
        }

        let mut tx = self.db.begin().await?;

        let mut sales = self.repository.list_farmer_orders(&mut tx, auth.user).await?;
        let line_rows = self
            .repository
            .list_farmer_order_lines(&mut tx, auth.user)
            .await?;

        tx.commit().await?;

        let mut lines_by_order: FxHashMap<OrderUuid, Vec<FarmerSaleLine>> = FxHashMap::default();

        for row in line_rows {
            lines_by_order.entry(row.order_uuid).or_default().push(row.line);
        }

        for sale in &mut sales {
            sale.items = lines_by_order.remove(&sale.uuid).unwrap_or_default();
        }

        Ok(sales)
    }

    async fn update_order_status(
        &self,
        auth: AuthContext,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<(), OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        // Resolve the order before authorizing: a missing order is reported
        // as not-found even to callers with no stake in it.
        let existing = self.repository.get_order(&mut tx, order).await?;

        let is_seller = self
            .repository
            .order_has_seller(&mut tx, existing.uuid, auth.user)
            .await?;

        if !is_seller {
            return Err(OrdersServiceError::Forbidden);
        }

        self.repository
            .update_order_status(&mut tx, existing.uuid, status)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Convert the caller's cart into an order.
    ///
    /// Atomically snapshots every cart line into an order line at the
    /// listing's current price, marks each listing unavailable, and clears
    /// the cart; on any failure none of those effects persist.
    async fn checkout(&self, auth: AuthContext) -> Result<CheckoutReceipt, OrdersServiceError>;

    /// The caller's purchases, newest first, with every line regardless of
    /// seller.
    async fn list_buyer_orders(
        &self,
        auth: AuthContext,
    ) -> Result<Vec<BuyerOrder>, OrdersServiceError>;

    /// Orders containing at least one of the calling farmer's listings,
    /// newest first, with only that farmer's lines.
    async fn list_farmer_sales(
        &self,
        auth: AuthContext,
    ) -> Result<Vec<FarmerSale>, OrdersServiceError>;

    /// Set an order's status. Allowed for any farmer who sells at least one
    /// line in the order.
    async fn update_order_status(
        &self,
        auth: AuthContext,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<(), OrdersServiceError>;
}
