//! Demo-data seeding.
//!
//! Inserts a small fixed catalog so a fresh install has something to browse.
//! Seeding is idempotent: nothing is inserted unless the table is empty.

use crate::DbPool;

/// Demo catalog rows: (name, description, release date, rating).
const DEMO_MOVIES: &[(&str, &str, &str, f64)] = &[
    (
        "Un nouveau départ",
        "C'est l'histoire d'un nouveau départ pour une famille qui quitte la ville.",
        "2021-09-15",
        5.0,
    ),
    (
        "Les lumières du port",
        "Un docker et une chanteuse se croisent chaque nuit sur les quais du Havre.",
        "2019-03-22",
        8.0,
    ),
    (
        "La dernière séance",
        "Le projectionniste d'un cinéma de quartier refuse de fermer la salle.",
        "2023-11-03",
        7.5,
    ),
];

/// Insert the demo catalog if the `movies` table is empty.
///
/// Returns the number of rows inserted (zero when data already exists).
pub async fn seed_movies(pool: &DbPool) -> Result<u64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM movies")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        tracing::debug!(existing = count, "Movies already present, skipping seed");
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    let mut inserted = 0u64;
    for (name, description, release_date, rating) in DEMO_MOVIES {
        let result = sqlx::query(
            "INSERT INTO movies (name, description, release_date, rating) \
             VALUES ($1, $2, $3::date, $4)",
        )
        .bind(name)
        .bind(description)
        .bind(release_date)
        .bind(rating)
        .execute(&mut *tx)
        .await?;
        inserted += result.rows_affected();
    }
    tx.commit().await?;

    tracing::info!(inserted, "Seeded demo movies");
    Ok(inserted)
}
