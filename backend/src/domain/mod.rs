//! Domain primitives, ports, and services.
//!
//! Purpose: define the user entity, transport-agnostic errors, and the ports
//! separating HTTP handlers from persistence adapters. Nothing in here knows
//! about actix-web or Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: failure payload and category.
//! - User / UserDraft / UserId: the user resource and its validated input.
//! - TraceId: request-scoped correlation identifier.
//! - UsersService: implementation of the driving ports over a repository.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod users_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDraft, UserId, UserValidationError};
pub use self::users_service::{
    CREATE_FAILED_MESSAGE, DELETE_FAILED_MESSAGE, GET_FAILED_MESSAGE, LIST_FAILED_MESSAGE,
    UPDATE_FAILED_MESSAGE, USER_NOT_FOUND_MESSAGE, UsersService,
};
