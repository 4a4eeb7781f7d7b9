//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use stockyard_app::auth::models::AuthContext;

const AUTH_CONTEXT_KEY: &str = "stockyard.auth_context";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Store the authenticated caller for downstream handlers.
    fn insert_auth_context(&mut self, auth: AuthContext);

    /// The authenticated caller, or 401 when the auth middleware did not
    /// run for this route.
    fn auth_context_or_401(&self) -> Result<AuthContext, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_auth_context(&mut self, auth: AuthContext) {
        self.insert(AUTH_CONTEXT_KEY, auth);
    }

    fn auth_context_or_401(&self) -> Result<AuthContext, StatusError> {
        self.get::<AuthContext>(AUTH_CONTEXT_KEY)
            .ok()
            .copied()
            .ok_or_else(|| StatusError::unauthorized().brief("Missing authentication"))
    }
}
