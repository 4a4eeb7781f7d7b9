//! Test context for service-level integration tests.

use crate::{
    auth::{
        PgAuthService,
        models::{AuthContext, UserRole},
        service::AuthService,
        token::TokenSigner,
    },
    database::Db,
    domain::{
        animals::{PgAnimalsService, records::AnimalUuid},
        carts::PgCartsService,
        orders::PgOrdersService,
    },
    test::{db::TestDb, helpers::new_user},
};

pub(crate) struct TestContext {
    pub(crate) db: TestDb,
    pub(crate) auth: PgAuthService,
    pub(crate) animals: PgAnimalsService,
    pub(crate) carts: PgCartsService,
    pub(crate) orders: PgOrdersService,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        let test_db = TestDb::new().await;
        let pool = test_db.pool().clone();
        let db = Db::new(pool.clone());

        Self {
            auth: PgAuthService::new(pool, TokenSigner::new("test-secret", 3600)),
            animals: PgAnimalsService::new(db.clone()),
            carts: PgCartsService::new(db.clone()),
            orders: PgOrdersService::new(db),
            db: test_db,
        }
    }

    /// Register a buyer account and return its identity.
    pub(crate) async fn register_user(&self, email: &str) -> AuthContext {
        self.register(email, UserRole::User).await
    }

    /// Register a farmer account and return its identity.
    pub(crate) async fn register_farmer(&self, email: &str) -> AuthContext {
        self.register(email, UserRole::Farmer).await
    }

    async fn register(&self, email: &str, role: UserRole) -> AuthContext {
        let session = self
            .auth
            .register(new_user(email, role))
            .await
            .expect("Failed to register test account");

        AuthContext {
            user: session.user.uuid,
            role: session.user.role,
        }
    }

    /// Flip a listing to unavailable behind the services' backs, simulating
    /// a sale that happened elsewhere.
    pub(crate) async fn mark_sold(&self, animal: AnimalUuid) {
        sqlx::query("UPDATE animals SET available = FALSE WHERE uuid = $1")
            .bind(animal.into_uuid())
            .execute(self.db.pool())
            .await
            .expect("Failed to mark animal sold");
    }
}
