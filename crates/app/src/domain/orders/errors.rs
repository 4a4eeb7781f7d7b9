//! Orders service errors.

use sqlx::{Error, error::ErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("order not found")]
    NotFound,

    #[error("caller is not a seller in this order")]
    Forbidden,

    #[error("a listing in the cart is no longer available")]
    Conflict,

    #[error("order total exceeds the supported range")]
    AmountOverflow,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        // Serialization failures and deadlocks are retryable races, and a
        // foreign-key violation during checkout means a listing vanished
        // mid-flight; all of them surface as a conflict.
        let is_conflict = error.as_database_error().is_some_and(|db| {
            matches!(db.code().as_deref(), Some("40001" | "40P01"))
                || matches!(db.kind(), ErrorKind::ForeignKeyViolation)
        });

        if is_conflict {
            return Self::Conflict;
        }

        Self::Sql(error)
    }
}
