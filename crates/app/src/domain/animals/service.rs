//! Animals service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    auth::models::{AuthContext, UserRole},
    database::Db,
    domain::animals::{
        data::{AnimalUpdate, NewAnimal},
        errors::AnimalsServiceError,
        records::{AnimalRecord, AnimalUuid},
        repository::PgAnimalsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgAnimalsService {
    db: Db,
    repository: PgAnimalsRepository,
}

impl PgAnimalsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAnimalsRepository::new(),
        }
    }
}

#[async_trait]
impl AnimalsService for PgAnimalsService {
    async fn list_animals(&self) -> Result<Vec<AnimalRecord>, AnimalsServiceError> {
        let mut tx = self.db.begin().await?;

        let animals = self.repository.list_animals(&mut tx).await?;

        tx.commit().await?;

        Ok(animals)
    }

    async fn get_animal(&self, animal: AnimalUuid) -> Result<AnimalRecord, AnimalsServiceError> {
        let mut tx = self.db.begin().await?;

        let animal = self.repository.get_animal(&mut tx, animal).await?;

        tx.commit().await?;

        Ok(animal)
    }

    async fn create_animal(
        &self,
        auth: AuthContext,
        animal: NewAnimal,
    ) -> Result<AnimalRecord, AnimalsServiceError> {
        if auth.role != UserRole::Farmer {
            return Err(AnimalsServiceError::Forbidden);
        }

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_animal(&mut tx, auth.user, &animal)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_animal(
        &self,
        auth: AuthContext,
        animal: AnimalUuid,
        update: AnimalUpdate,
    ) -> Result<AnimalRecord, AnimalsServiceError> {
        let mut tx = self.db.begin().await?;

        let existing = self.repository.get_animal(&mut tx, animal).await?;

        if existing.farmer_uuid != auth.user {
            return Err(AnimalsServiceError::Forbidden);
        }

        let updated = self
            .repository
            .update_animal(&mut tx, animal, &update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_animal(
        &self,
        auth: AuthContext,
        animal: AnimalUuid,
    ) -> Result<(), AnimalsServiceError> {
        let mut tx = self.db.begin().await?;

        let existing = self.repository.get_animal(&mut tx, animal).await?;

        if existing.farmer_uuid != auth.user {
            return Err(AnimalsServiceError::Forbidden);
        }

        let rows_affected = self.repository.delete_animal(&mut tx, animal).await?;

        if rows_affected == 0 {
            return Err(AnimalsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AnimalsService: Send + Sync {
    /// Retrieves all currently available listings.
    async fn list_animals(&self) -> Result<Vec<AnimalRecord>, AnimalsServiceError>;

    /// Retrieve a single listing.
    async fn get_animal(&self, animal: AnimalUuid) -> Result<AnimalRecord, AnimalsServiceError>;

    /// Creates a listing owned by the calling farmer.
    async fn create_animal(
        &self,
        auth: AuthContext,
        animal: NewAnimal,
    ) -> Result<AnimalRecord, AnimalsServiceError>;

    /// Updates a listing. Only the owning farmer may update it.
    async fn update_animal(
        &self,
        auth: AuthContext,
        animal: AnimalUuid,
        update: AnimalUpdate,
    ) -> Result<AnimalRecord, AnimalsServiceError>;

    /// Deletes a listing. Only the owning farmer may delete it.
    async fn delete_animal(
        &self,
        auth: AuthContext,
        animal: AnimalUuid,
    ) -> Result<(), AnimalsServiceError>;
}
