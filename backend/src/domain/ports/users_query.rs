//! Driving port for user reads.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for listing and fetching users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every user known to the service.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// A single user by identifier.
    async fn get_user(&self, id: UserId) -> Result<User, Error>;
}
