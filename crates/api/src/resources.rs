//! External representations of domain entities.
//!
//! Row models carry audit columns that are internal to the service; the
//! types here define what actually leaves over HTTP.

use chrono::NaiveDate;
use serde::Serialize;
use cinelog_core::types::DbId;
use cinelog_db::models::movie::Movie;

/// Public JSON shape of a movie: the four business attributes plus the ID.
/// `created_at` and `updated_at` are not exposed.
#[derive(Debug, Clone, Serialize)]
pub struct MovieResource {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub rating: f64,
}

impl From<Movie> for MovieResource {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            name: movie.name,
            description: movie.description,
            release_date: movie.release_date,
            rating: movie.rating,
        }
    }
}

impl MovieResource {
    /// Map a list of rows into their external representation.
    pub fn collection(movies: Vec<Movie>) -> Vec<MovieResource> {
        movies.into_iter().map(MovieResource::from).collect()
    }
}
