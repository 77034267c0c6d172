//! Cinelog API server library.
//!
//! Exposes the building blocks (config, state, errors, response envelope,
//! routes) so the binary entrypoint and the integration tests construct the
//! exact same router.

pub mod config;
pub mod error;
pub mod handlers;
pub mod resources;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
