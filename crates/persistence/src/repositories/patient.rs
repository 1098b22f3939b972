//! Patient repository for database operations.

use async_trait::async_trait;
use chrono::Utc;
use domain::models::{Patient, PatientInput};
use domain::stores::PatientDirectory;
use domain::StoreError;
use sqlx::PgPool;

use crate::entities::PatientEntity;

/// PostgreSQL-backed patient directory.
#[derive(Clone)]
pub struct PatientRepository {
    pool: PgPool,
}

impl PatientRepository {
    /// Creates a new PatientRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, id: &str, input: &PatientInput) -> Result<PatientEntity, sqlx::Error> {
        let now = Utc::now();
        sqlx::query_as::<_, PatientEntity>(
            r#"
            INSERT INTO patients (id, nik, name, gender, birth_date, address, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING id, nik, name, gender, birth_date, address, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.nik)
        .bind(&input.name)
        .bind(&input.gender)
        .bind(input.birth_date)
        .bind(&input.address)
        .bind(now)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn find_all(&self) -> Result<Vec<PatientEntity>, sqlx::Error> {
        sqlx::query_as::<_, PatientEntity>(
            r#"
            SELECT id, nik, name, gender, birth_date, address, created_at, updated_at
            FROM patients
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Update a patient. `updated_at` never moves backwards.
    pub async fn update(
        &self,
        id: &str,
        input: &PatientInput,
    ) -> Result<Option<PatientEntity>, sqlx::Error> {
        sqlx::query_as::<_, PatientEntity>(
            r#"
            UPDATE patients
            SET nik = $2, name = $3, gender = $4, birth_date = $5, address = $6,
                updated_at = GREATEST(updated_at, $7)
            WHERE id = $1
            RETURNING id, nik, name, gender, birth_date, address, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.nik)
        .bind(&input.name)
        .bind(&input.gender)
        .bind(input.birth_date)
        .bind(&input.address)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
    }

    /// Returns the number of rows deleted.
    pub async fn delete(&self, id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM patients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl PatientDirectory for PatientRepository {
    async fn create(&self, input: PatientInput) -> Result<Patient, StoreError> {
        let id = shared::crypto::generate_record_id();
        Ok(self.insert(&id, &input).await?.into())
    }

    async fn list(&self) -> Result<Vec<Patient>, StoreError> {
        Ok(self.find_all().await?.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: &str, input: PatientInput) -> Result<Option<Patient>, StoreError> {
        Ok(PatientRepository::update(self, id, &input).await?.map(Into::into))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        Ok(PatientRepository::delete(self, id).await? > 0)
    }
}
