//! Handlers for the movie catalog.
//!
//! Provides the five CRUD endpoints. Writes run inside an explicit
//! transaction: the handler begins it, hands it to the repository, and
//! commits only after the statement succeeds. Dropping the transaction on
//! any early return rolls the write back.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use cinelog_core::error::CoreError;
use cinelog_core::movie;
use cinelog_core::types::DbId;
use cinelog_db::models::movie::{CreateMovie, Movie, UpdateMovie};

use crate::error::{AppError, AppResult};
use crate::resources::MovieResource;
use crate::response;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a movie exists, returning the full row.
async fn ensure_movie_exists(state: &AppState, id: DbId) -> AppResult<Movie> {
    state.repo.get_by_id(id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        })
    })
}

/// Run the field-level checks shared by create and update payloads.
fn validate_fields(name: &str, description: &str, rating: f64) -> AppResult<()> {
    movie::validate_name(name)?;
    movie::validate_description(description)?;
    movie::validate_rating(rating)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// GET /movies
// ---------------------------------------------------------------------------

/// List the whole catalog.
///
/// An empty catalog is reported as a 500 "No movies found" envelope (with
/// `data: []`) rather than an empty 200 list.
pub async fn list_movies(State(state): State<AppState>) -> AppResult<Response> {
    let movies = state.repo.list().await?;
    if movies.is_empty() {
        return Ok(response::send(
            StatusCode::INTERNAL_SERVER_ERROR,
            Some(Vec::<MovieResource>::new()),
            "No movies found",
        ));
    }

    tracing::debug!(count = movies.len(), "Listed movies");
    Ok(response::send(
        StatusCode::OK,
        Some(MovieResource::collection(movies)),
        "",
    ))
}

// ---------------------------------------------------------------------------
// POST /movies
// ---------------------------------------------------------------------------

/// Create a new movie.
pub async fn create_movie(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<Response> {
    validate_fields(&input.name, &input.description, input.rating)?;

    let mut tx = state.pool.begin().await?;
    let created = state.repo.create(&mut tx, &input).await?;
    tx.commit().await?;

    tracing::info!(id = created.id, name = %created.name, "Movie created");
    Ok(response::send(
        StatusCode::CREATED,
        Some(MovieResource::from(created)),
        "Movie created successfully",
    ))
}

// ---------------------------------------------------------------------------
// GET /movies/{id}
// ---------------------------------------------------------------------------

/// Get a single movie by ID.
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let found = ensure_movie_exists(&state, id).await?;
    Ok(response::send(
        StatusCode::OK,
        Some(MovieResource::from(found)),
        "",
    ))
}

// ---------------------------------------------------------------------------
// PUT /movies/{id}
// ---------------------------------------------------------------------------

/// Replace the fields of an existing movie.
///
/// The response carries the row as re-read after the commit, so clients
/// always see the values the update actually produced.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<Response> {
    ensure_movie_exists(&state, id).await?;
    validate_fields(&input.name, &input.description, input.rating)?;

    let mut tx = state.pool.begin().await?;
    let updated = state.repo.update(&mut tx, id, &input).await?;
    tx.commit().await?;

    if !updated {
        // The row vanished between the existence check and the update.
        return Ok(response::send(
            StatusCode::UNPROCESSABLE_ENTITY,
            None::<MovieResource>,
            "Unable to process the request",
        ));
    }

    let fresh = ensure_movie_exists(&state, id).await?;
    tracing::info!(id = fresh.id, "Movie updated");
    Ok(response::send(
        StatusCode::OK,
        Some(MovieResource::from(fresh)),
        "Movie updated successfully",
    ))
}

// ---------------------------------------------------------------------------
// DELETE /movies/{id}
// ---------------------------------------------------------------------------

/// Delete a movie by ID. Replies `204 No Content` on success.
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    ensure_movie_exists(&state, id).await?;

    let deleted = state.repo.delete(id).await?;
    if !deleted {
        return Ok(response::send(
            StatusCode::INTERNAL_SERVER_ERROR,
            None::<MovieResource>,
            "Error deleting movie",
        ));
    }

    tracing::info!(id, "Movie deleted");
    Ok(StatusCode::NO_CONTENT.into_response())
}
