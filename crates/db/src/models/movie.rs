//! Movie model and write DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use cinelog_core::types::{DbId, Timestamp};

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub rating: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new movie. Every field is required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub rating: f64,
}

/// DTO for updating an existing movie.
///
/// Updates replace the whole attribute set, so this mirrors [`CreateMovie`]
/// rather than using the optional-field shape a partial patch would.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMovie {
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub rating: f64,
}
