//! Animal listings

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub(crate) use repository::{PgAnimalsRepository, bind_amount, try_get_amount};

pub use errors::AnimalsServiceError;
pub use service::*;
