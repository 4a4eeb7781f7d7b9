//! Animal Records

use jiff::Timestamp;

use crate::{auth::models::UserUuid, uuids::TypedUuid};

/// Animal UUID
pub type AnimalUuid = TypedUuid<AnimalRecord>;

/// Animal Record
///
/// A listing is a single sellable animal with one price and a binary
/// availability flag, not a stock-counted SKU.
#[derive(Debug, Clone)]
pub struct AnimalRecord {
    pub uuid: AnimalUuid,
    pub farmer_uuid: UserUuid,
    pub name: String,
    pub breed: String,
    pub price: u64,
    pub available: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
