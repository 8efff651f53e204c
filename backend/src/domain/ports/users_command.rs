//! Driving port for user mutations.
//!
//! Inbound adapters call this port after validating request payloads. Errors
//! are domain [`Error`] values carrying the message the client should see.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDraft, UserId};

/// Domain use-case port for creating, replacing, and deleting users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Create a user and return it with its assigned identifier.
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error>;

    /// Replace `name` and `bio` of an existing user.
    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, Error>;

    /// Delete a user and return the removed record.
    async fn delete_user(&self, id: UserId) -> Result<User, Error>;
}
