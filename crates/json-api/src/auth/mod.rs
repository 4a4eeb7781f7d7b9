//! Authentication

pub(crate) mod errors;
mod handlers;
pub(crate) mod middleware;
mod models;

pub(crate) use handlers::*;
pub(crate) use models::{SessionResponse, UserResponse};
