//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Provides the [`DieselUserRepository`] implementation of the domain's
//! `UserRepository` port, backed by `diesel-async` with `bb8` connection
//! pooling.
//!
//! - Row structs (`models.rs`) and the table definition (`schema.rs`) are
//!   internal and never reach the domain layer.
//! - Pool and Diesel failures are mapped to `UserPersistenceError`.
//!
//! # Example
//!
//! ```ignore
//! use users_api::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let config = PoolConfig::new("postgres://localhost/users");
//! let pool = DbPool::new(config).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DEFAULT_MAX_CONNECTIONS, DbPool, PoolConfig, PoolError};
