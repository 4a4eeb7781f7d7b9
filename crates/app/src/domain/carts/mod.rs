//! Carts

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub(crate) use repository::{PgCartItemsRepository, bind_quantity, try_get_quantity};

pub use errors::CartsServiceError;
pub use service::*;
