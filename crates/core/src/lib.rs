//! Domain layer for the Cinelog movie catalog.
//!
//! Holds the shared ID and timestamp aliases, the domain error type, and the
//! movie field validation rules. This crate knows nothing about HTTP or the
//! database; those concerns live in `cinelog-api` and `cinelog-db`.

pub mod error;
pub mod movie;
pub mod types;
