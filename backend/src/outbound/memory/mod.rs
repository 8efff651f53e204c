//! In-process adapters for running without external infrastructure.
//!
//! These back the service when no database is configured and give
//! integration tests a deterministic store.

mod user_repository;

pub use user_repository::InMemoryUserRepository;
