//! Orders Data

use crate::domain::{animals::records::AnimalUuid, orders::records::OrderUuid};

/// Result of a successful checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutReceipt {
    pub order: OrderUuid,
    pub total_amount: u64,
}

/// A cart line read under lock during checkout, carrying the listing's
/// price at that instant.
#[derive(Debug, Clone)]
pub(crate) struct CheckoutLine {
    pub(crate) animal_uuid: AnimalUuid,
    pub(crate) quantity: u32,
    pub(crate) price: u64,
}
