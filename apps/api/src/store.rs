//! Career Repository — pluggable, trait-based access to the career catalogue.
//!
//! Default: `PgCareerRepository` (PostgreSQL via sqlx).
//! Tests: `InMemoryCareerRepository`.
//!
//! `AppState` holds an `Arc<dyn CareerRepository>`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::errors::AppError;
use crate::models::career::Career;

const CAREER_COLUMNS: &str = "career_id, name, cluster, required_skills, suggested_subjects, \
     vet_options, pathways, job_outlook";

#[async_trait]
pub trait CareerRepository: Send + Sync {
    /// All careers, ordered by `career_id`.
    async fn list_careers(&self) -> Result<Vec<Career>, AppError>;

    async fn find_career(&self, career_id: &str) -> Result<Option<Career>, AppError>;

    async fn count_careers(&self) -> Result<u64, AppError>;

    /// Inserts careers whose `career_id` is not stored yet. Existing rows are never updated.
    /// Returns the number of rows inserted.
    async fn insert_careers(&self, careers: &[Career]) -> Result<u64, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// PostgreSQL
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct PgCareerRepository {
    pool: PgPool,
}

impl PgCareerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CareerRepository for PgCareerRepository {
    async fn list_careers(&self) -> Result<Vec<Career>, AppError> {
        let careers = sqlx::query_as::<_, Career>(&format!(
            "SELECT {CAREER_COLUMNS} FROM careers ORDER BY career_id"
        ))
        .fetch_all(&self.pool)
        .await?;
        debug!("Loaded {} careers", careers.len());
        Ok(careers)
    }

    async fn find_career(&self, career_id: &str) -> Result<Option<Career>, AppError> {
        debug!("Looking up career {career_id}");
        Ok(sqlx::query_as::<_, Career>(&format!(
            "SELECT {CAREER_COLUMNS} FROM careers WHERE career_id = $1"
        ))
        .bind(career_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn count_careers(&self) -> Result<u64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM careers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }

    async fn insert_careers(&self, careers: &[Career]) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for career in careers {
            let result = sqlx::query(
                r#"
                INSERT INTO careers
                    (career_id, name, cluster, required_skills, suggested_subjects,
                     vet_options, pathways, job_outlook)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ON CONFLICT (career_id) DO NOTHING
                "#,
            )
            .bind(&career.career_id)
            .bind(&career.name)
            .bind(&career.cluster)
            .bind(&career.required_skills)
            .bind(&career.suggested_subjects)
            .bind(&career.vet_options)
            .bind(&career.pathways)
            .bind(&career.job_outlook)
            .execute(&mut *tx)
            .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        debug!("Inserted {inserted} of {} careers", careers.len());
        Ok(inserted)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory (tests)
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
pub use memory::InMemoryCareerRepository;
