//! Carts Data

use crate::domain::{animals::records::AnimalUuid, carts::records::CartItemUuid};

/// New Cart Item Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItem {
    pub uuid: CartItemUuid,
    pub animal_uuid: AnimalUuid,
    pub quantity: u32,
}
