//! Request middleware.
//!
//! Purpose: cross-cutting request lifecycle concerns applied to every route.

pub mod cors;
pub mod trace;

pub use cors::{permissive_cors, preflight_no_content};
pub use trace::Trace;
