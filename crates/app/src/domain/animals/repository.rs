//! Animals Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    auth::models::UserUuid,
    domain::animals::{
        data::{AnimalUpdate, NewAnimal},
        records::{AnimalRecord, AnimalUuid},
    },
};

const LIST_ANIMALS_SQL: &str = include_str!("sql/list_animals.sql");
const GET_ANIMAL_SQL: &str = include_str!("sql/get_animal.sql");
const CREATE_ANIMAL_SQL: &str = include_str!("sql/create_animal.sql");
const UPDATE_ANIMAL_SQL: &str = include_str!("sql/update_animal.sql");
const DELETE_ANIMAL_SQL: &str = include_str!("sql/delete_animal.sql");
const MARK_ANIMAL_UNAVAILABLE_SQL: &str = include_str!("sql/mark_animal_unavailable.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAnimalsRepository;

impl PgAnimalsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_animals(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<AnimalRecord>, sqlx::Error> {
        query_as::<Postgres, AnimalRecord>(LIST_ANIMALS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_animal(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        animal: AnimalUuid,
    ) -> Result<AnimalRecord, sqlx::Error> {
        query_as::<Postgres, AnimalRecord>(GET_ANIMAL_SQL)
            .bind(animal.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_animal(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        farmer: UserUuid,
        animal: &NewAnimal,
    ) -> Result<AnimalRecord, sqlx::Error> {
        query_as::<Postgres, AnimalRecord>(CREATE_ANIMAL_SQL)
            .bind(animal.uuid.into_uuid())
            .bind(farmer.into_uuid())
            .bind(&animal.name)
            .bind(&animal.breed)
            .bind(bind_amount(animal.price, "price")?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_animal(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        animal: AnimalUuid,
        update: &AnimalUpdate,
    ) -> Result<AnimalRecord, sqlx::Error> {
        query_as::<Postgres, AnimalRecord>(UPDATE_ANIMAL_SQL)
            .bind(animal.into_uuid())
            .bind(&update.name)
            .bind(&update.breed)
            .bind(bind_amount(update.price, "price")?)
            .bind(update.available)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_animal(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        animal: AnimalUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ANIMAL_SQL)
            .bind(animal.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Flip an available listing to unavailable. Returns 0 when the listing
    /// is missing or already sold, which checkout treats as a conflict.
    pub(crate) async fn mark_unavailable(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        animal: AnimalUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(MARK_ANIMAL_UNAVAILABLE_SQL)
            .bind(animal.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for AnimalRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: AnimalUuid::from_uuid(row.try_get("uuid")?),
            farmer_uuid: UserUuid::from_uuid(row.try_get("farmer_uuid")?),
            name: row.try_get("name")?,
            breed: row.try_get("breed")?,
            price: try_get_amount(row, "price")?,
            available: row.try_get("available")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

pub(crate) fn try_get_amount(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    let amount_i64: i64 = row.try_get(col)?;

    u64::try_from(amount_i64).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

pub(crate) fn bind_amount(amount: u64, col: &str) -> Result<i64, sqlx::Error> {
    i64::try_from(amount).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}
