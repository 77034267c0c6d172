//! Request handlers.
//!
//! Handlers validate input, open transactions for writes, delegate
//! persistence to the movie repository, and shape every reply through the
//! response envelope.

pub mod movies;
