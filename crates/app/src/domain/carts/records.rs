//! Cart Records

use jiff::Timestamp;

use crate::{auth::models::UserUuid, domain::animals::records::AnimalUuid, uuids::TypedUuid};

/// Cart Item UUID
pub type CartItemUuid = TypedUuid<CartItemRecord>;

/// CartItem Record
///
/// One pending line in a buyer's cart: a listing plus a desired quantity,
/// held until checkout or removal.
#[derive(Debug, Clone)]
pub struct CartItemRecord {
    pub uuid: CartItemUuid,
    pub user_uuid: UserUuid,
    pub animal_uuid: AnimalUuid,
    pub quantity: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Cart line joined with its listing for display.
#[derive(Debug, Clone)]
pub struct CartLineRecord {
    pub uuid: CartItemUuid,
    pub animal_uuid: AnimalUuid,
    pub animal_name: String,
    pub animal_breed: String,
    pub price: u64,
    pub quantity: u32,
}

impl CartLineRecord {
    /// Display subtotal, recomputed from the listing's current price.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.quantity))
    }
}
