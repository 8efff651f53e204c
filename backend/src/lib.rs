//! Users API library: a CRUD REST service over users with a name and a bio.
//!
//! - [`domain`] holds the user model, ports, and the users service.
//! - [`inbound::http`] exposes the actix-web handlers.
//! - [`outbound`] provides in-memory and PostgreSQL repositories.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
