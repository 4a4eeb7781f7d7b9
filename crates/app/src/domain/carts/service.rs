//! Carts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    auth::models::AuthContext,
    database::Db,
    domain::{
        animals::PgAnimalsRepository,
        carts::{
            data::NewCartItem,
            errors::CartsServiceError,
            records::{CartItemRecord, CartItemUuid, CartLineRecord},
            repository::PgCartItemsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    items_repository: PgCartItemsRepository,
    animals_repository: PgAnimalsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            items_repository: PgCartItemsRepository::new(),
            animals_repository: PgAnimalsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn list_cart(&self, auth: AuthContext) -> Result<Vec<CartLineRecord>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let lines = self.items_repository.list_cart_lines(&mut tx, auth.user).await?;

        tx.commit().await?;

        Ok(lines)
    }

    async fn add_item(
        &self,
        auth: AuthContext,
        item: NewCartItem,
    ) -> Result<CartItemRecord, CartsServiceError> {
        if item.quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let mut tx = self.db.begin().await?;

        let animal = self
            .animals_repository
            .get_animal(&mut tx, item.animal_uuid)
            .await?;

        if !animal.available {
            return Err(CartsServiceError::AnimalUnavailable);
        }

        let created = self
            .items_repository
            .add_cart_item(&mut tx, auth.user, &item)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_item(
        &self,
        auth: AuthContext,
        item: CartItemUuid,
        quantity: u32,
    ) -> Result<CartItemRecord, CartsServiceError> {
        if quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let mut tx = self.db.begin().await?;

        let updated = self
            .items_repository
            .update_cart_item(&mut tx, auth.user, item, quantity)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn remove_item(
        &self,
        auth: AuthContext,
        item: CartItemUuid,
    ) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .items_repository
            .delete_cart_item(&mut tx, auth.user, item)
            .await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the caller's cart lines with their listing details.
    async fn list_cart(&self, auth: AuthContext) -> Result<Vec<CartLineRecord>, CartsServiceError>;

    /// Add a listing to the caller's cart. Adding a listing that is already
    /// carted bumps the line's quantity instead of creating a second line.
    async fn add_item(
        &self,
        auth: AuthContext,
        item: NewCartItem,
    ) -> Result<CartItemRecord, CartsServiceError>;

    /// Replace the quantity on one of the caller's cart lines.
    async fn update_item(
        &self,
        auth: AuthContext,
        item: CartItemUuid,
        quantity: u32,
    ) -> Result<CartItemRecord, CartsServiceError>;

    /// Remove one of the caller's cart lines.
    async fn remove_item(
        &self,
        auth: AuthContext,
        item: CartItemUuid,
    ) -> Result<(), CartsServiceError>;
}
