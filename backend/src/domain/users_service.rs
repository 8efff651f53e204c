//! User directory domain service.
//!
//! Implements the [`UsersCommand`] and [`UsersQuery`] driving ports over any
//! [`UserRepository`]. Missing records become [`ErrorCode::NotFound`]
//! errors and storage failures become [`ErrorCode::InternalError`] errors with
//! a fixed, operation-specific message. The underlying failure is logged and
//! never handed to adapters.
//!
//! [`ErrorCode::NotFound`]: crate::domain::ErrorCode::NotFound
//! [`ErrorCode::InternalError`]: crate::domain::ErrorCode::InternalError

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{Error, User, UserDraft, UserId};

/// Message returned when an identifier matches no stored user.
pub const USER_NOT_FOUND_MESSAGE: &str = "The user with the specified ID does not exist";
/// Message returned when a create fails in storage.
pub const CREATE_FAILED_MESSAGE: &str =
    "There was an error while saving the user to the database";
/// Message returned when listing fails in storage.
pub const LIST_FAILED_MESSAGE: &str = "The users information could not be retrieved";
/// Message returned when a single lookup fails in storage.
pub const GET_FAILED_MESSAGE: &str = "The user information could not be retrieved";
/// Message returned when a delete fails in storage.
pub const DELETE_FAILED_MESSAGE: &str = "The user could not be removed";
/// Message returned when an update fails in storage.
pub const UPDATE_FAILED_MESSAGE: &str = "The user information could not be modified";

/// Users service implementing the driving ports.
#[derive(Clone)]
pub struct UsersService<R> {
    repository: Arc<R>,
}

impl<R> UsersService<R> {
    /// Create a new service backed by `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn storage_failure(
    operation: &'static str,
    message: &'static str,
) -> impl FnOnce(UserPersistenceError) -> Error {
    move |err| {
        error!(error = %err, operation, "user repository call failed");
        Error::internal(message)
    }
}

fn found(user: Option<User>) -> Result<User, Error> {
    user.ok_or_else(|| Error::not_found(USER_NOT_FOUND_MESSAGE))
}

#[async_trait]
impl<R> UsersCommand for UsersService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error> {
        self.repository
            .insert(&draft)
            .await
            .map_err(storage_failure("create_user", CREATE_FAILED_MESSAGE))
    }

    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, Error> {
        let updated = self
            .repository
            .update(id, &draft)
            .await
            .map_err(storage_failure("update_user", UPDATE_FAILED_MESSAGE))?;
        found(updated)
    }

    async fn delete_user(&self, id: UserId) -> Result<User, Error> {
        let removed = self
            .repository
            .remove(id)
            .await
            .map_err(storage_failure("delete_user", DELETE_FAILED_MESSAGE))?;
        found(removed)
    }
}

#[async_trait]
impl<R> UsersQuery for UsersService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository
            .find()
            .await
            .map_err(storage_failure("list_users", LIST_FAILED_MESSAGE))
    }

    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        let user = self
            .repository
            .find_by_id(id)
            .await
            .map_err(storage_failure("get_user", GET_FAILED_MESSAGE))?;
        found(user)
    }
}

#[cfg(test)]
#[path = "users_service_tests.rs"]
mod tests;
