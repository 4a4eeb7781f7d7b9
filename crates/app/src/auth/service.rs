//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::auth::{
    errors::AuthServiceError,
    models::{AuthContext, AuthSession, NewUser, UserRecord, UserUuid},
    password::{hash_password, verify_password},
    repository::PgAuthRepository,
    token::TokenSigner,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
    tokens: TokenSigner,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool, tokens: TokenSigner) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
            tokens,
        }
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn register(&self, user: NewUser) -> Result<AuthSession, AuthServiceError> {
        let password_hash =
            hash_password(&user.password).map_err(|_| AuthServiceError::PasswordHash)?;

        let created = self.repository.create_user(&user, &password_hash).await?;

        let token = self.tokens.issue(created.uuid)?;

        Ok(AuthSession {
            token,
            user: created,
        })
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AuthServiceError> {
        let stored = self
            .repository
            .find_user_by_email(email)
            .await?
            .ok_or(AuthServiceError::InvalidCredentials)?;

        if !verify_password(password, &stored.password_hash) {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let token = self.tokens.issue(stored.user.uuid)?;

        Ok(AuthSession {
            token,
            user: stored.user,
        })
    }

    async fn authenticate_bearer(
        &self,
        bearer_token: &str,
    ) -> Result<AuthContext, AuthServiceError> {
        let user_uuid = self.tokens.verify(bearer_token)?;

        let user = self.repository.get_user(user_uuid).await?;

        Ok(AuthContext {
            user: user.uuid,
            role: user.role,
        })
    }

    async fn profile(&self, user: UserUuid) -> Result<UserRecord, AuthServiceError> {
        self.repository.get_user(user).await.map_err(Into::into)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Create an account and issue its first bearer token.
    async fn register(&self, user: NewUser) -> Result<AuthSession, AuthServiceError>;

    /// Verify credentials and issue a bearer token.
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AuthServiceError>;

    /// Resolve a bearer token into the caller's identity and role.
    async fn authenticate_bearer(
        &self,
        bearer_token: &str,
    ) -> Result<AuthContext, AuthServiceError>;

    /// Fetch the account behind an authenticated identity.
    async fn profile(&self, user: UserUuid) -> Result<UserRecord, AuthServiceError>;
}
