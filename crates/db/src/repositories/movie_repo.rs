//! Repository for the `movies` table.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use cinelog_core::types::DbId;

use crate::models::movie::{CreateMovie, Movie, UpdateMovie};

const COLUMNS: &str = "id, name, description, release_date, rating, created_at, updated_at";

/// Persistence contract for movies.
///
/// Reads and deletes run against the pool held by the implementation.
/// Create and update run on a transaction owned by the caller: committing
/// is the caller's job, and dropping the transaction without a commit
/// rolls the write back.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// List all movies in insertion order.
    async fn list(&self) -> Result<Vec<Movie>, sqlx::Error>;

    /// Find a movie by ID. A missing row is `Ok(None)`, not an error.
    async fn get_by_id(&self, id: DbId) -> Result<Option<Movie>, sqlx::Error>;

    /// Insert a new movie inside `tx`, returning the created row.
    async fn create(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        input: &CreateMovie,
    ) -> Result<Movie, sqlx::Error>;

    /// Replace the fields of the movie identified by `id` inside `tx`.
    ///
    /// Returns `true` if a row matched.
    async fn update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<bool, sqlx::Error>;

    /// Hard-delete a movie by ID. Returns `true` if a row was removed.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;
}

/// PostgreSQL-backed [`MovieRepository`].
#[derive(Clone)]
pub struct PgMovieRepo {
    pool: PgPool,
}

impl PgMovieRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieRepository for PgMovieRepo {
    async fn list(&self) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id ASC");
        sqlx::query_as::<_, Movie>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn get_by_id(&self, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        input: &CreateMovie,
    ) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (name, description, release_date, rating) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.release_date)
            .bind(input.rating)
            .fetch_one(&mut **tx)
            .await
    }

    async fn update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE movies \
             SET name = $2, description = $3, release_date = $4, rating = $5 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.release_date)
        .bind(input.rating)
        .execute(&mut **tx)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
