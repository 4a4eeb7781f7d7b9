//! Order Records

use std::str::FromStr;

use jiff::Timestamp;
use thiserror::Error;

use crate::{
    auth::models::UserUuid,
    domain::animals::records::AnimalUuid,
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Item UUID
pub type OrderItemUuid = TypedUuid<OrderItemRecord>;

/// Order lifecycle status.
///
/// The set of values is closed, but no transition graph is enforced: any
/// known status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown order status")]
pub struct UnknownStatusError;

impl FromStr for OrderStatus {
    type Err = UnknownStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(UnknownStatusError),
        }
    }
}

/// Order Record
///
/// The immutable financial record created from a cart at checkout time.
/// Only `status` ever changes after creation.
#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub buyer_uuid: UserUuid,
    pub total_amount: u64,
    pub status: OrderStatus,
    pub created_at: Timestamp,
}

/// OrderItem Record
///
/// A snapshot of one cart line at the moment of checkout. Quantity and
/// price are fixed here and never recomputed from the listing.
#[derive(Debug, Clone)]
pub struct OrderItemRecord {
    pub uuid: OrderItemUuid,
    pub order_uuid: OrderUuid,
    pub animal_uuid: AnimalUuid,
    pub quantity: u32,
    pub price: u64,
    pub created_at: Timestamp,
}

/// One line of a buyer's order projection, joined with listing details.
#[derive(Debug, Clone)]
pub struct BuyerOrderLine {
    pub uuid: OrderItemUuid,
    pub animal_name: String,
    pub animal_breed: String,
    pub quantity: u32,
    pub price: u64,
}

impl BuyerOrderLine {
    /// Display subtotal, recomputed from the snapshotted price.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.quantity))
    }
}

/// Buyer projection of an order: every line, regardless of seller.
#[derive(Debug, Clone)]
pub struct BuyerOrder {
    pub uuid: OrderUuid,
    pub total_amount: u64,
    pub status: OrderStatus,
    pub created_at: Timestamp,
    pub items: Vec<BuyerOrderLine>,
}

/// Buyer identity shown to sellers on their sales.
#[derive(Debug, Clone)]
pub struct BuyerContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// One line of a farmer's sales projection.
#[derive(Debug, Clone)]
pub struct FarmerSaleLine {
    pub animal_name: String,
    pub quantity: u32,
    pub price: u64,
}

impl FarmerSaleLine {
    /// Display subtotal, recomputed from the snapshotted price.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.quantity))
    }
}

/// Farmer projection of an order: only the lines whose listings this
/// farmer owns, plus the buyer's contact details.
#[derive(Debug, Clone)]
pub struct FarmerSale {
    pub uuid: OrderUuid,
    pub total_amount: u64,
    pub status: OrderStatus,
    pub created_at: Timestamp,
    pub buyer: BuyerContact,
    pub items: Vec<FarmerSaleLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_every_known_value() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>().ok(), Some(status));
        }
    }

    #[test]
    fn status_rejects_unknown_value() {
        assert!("returned".parse::<OrderStatus>().is_err());
        assert!("PENDING".parse::<OrderStatus>().is_err());
        assert!("".parse::<OrderStatus>().is_err());
    }
}
