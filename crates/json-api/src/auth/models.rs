//! Auth response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockyard_app::auth::models::UserRecord;

/// Account shown back to its owner.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub user_type: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.uuid.into(),
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            user_type: user.role.as_str().to_string(),
            phone: user.phone,
            address: user.address,
        }
    }
}

/// Registration or login result: a fresh bearer token plus the account.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SessionResponse {
    pub message: String,
    pub access_token: String,
    pub user: UserResponse,
}
