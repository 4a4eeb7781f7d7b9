//! Account models.

use std::str::FromStr;

use jiff::Timestamp;
use thiserror::Error;

use crate::uuids::TypedUuid;

/// User UUID
pub type UserUuid = TypedUuid<UserRecord>;

/// Account role. Farmers sell listings; users buy them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    User,
    Farmer,
}

impl UserRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Farmer => "farmer",
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown role")]
pub struct UnknownRoleError;

impl FromStr for UserRole {
    type Err = UnknownRoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Self::User),
            "farmer" => Ok(Self::Farmer),
            _ => Err(UnknownRoleError),
        }
    }
}

/// User Record
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub uuid: UserUuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: Timestamp,
}

/// Authenticated caller identity, resolved once per request and passed by
/// value into every protected operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    pub user: UserUuid,
    pub role: UserRole,
}

/// New account payload. `password` is the clear text; it is hashed before
/// it reaches storage.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub uuid: UserUuid,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Successful registration or login: a bearer token plus the account it
/// belongs to.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: UserRecord,
}

/// Stored account row including the password hash. Never leaves this module
/// tree.
#[derive(Debug, Clone)]
pub(crate) struct StoredUser {
    pub(crate) user: UserRecord,
    pub(crate) password_hash: String,
}
