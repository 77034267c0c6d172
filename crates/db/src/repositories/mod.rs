//! Repository layer.
//!
//! All persistence goes through the [`MovieRepository`] trait; the only
//! implementation talks to PostgreSQL via sqlx. Mutating operations run
//! inside a transaction owned by the caller, so request handlers control
//! commit and rollback.

pub mod movie_repo;

pub use movie_repo::{MovieRepository, PgMovieRepo};
