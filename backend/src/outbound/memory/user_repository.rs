//! `UserRepository` adapter keeping users in a mutex-guarded map.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDraft, UserId};

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    users: BTreeMap<UserId, User>,
}

/// In-memory implementation of the [`UserRepository`] port.
///
/// Identifiers start at 1 and are never reused, even after a delete. `find`
/// yields users in identifier order.
///
/// # Examples
/// ```
/// use users_api::domain::UserDraft;
/// use users_api::domain::ports::UserRepository;
/// use users_api::outbound::memory::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryUserRepository::new();
/// let draft = UserDraft::try_new("Ada", "mathematician").expect("valid draft");
/// let user = repo.insert(&draft).await.expect("insert");
/// assert_eq!(user.id().as_i64(), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: Mutex<Store>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, UserPersistenceError> {
        self.store
            .lock()
            .map_err(|_| UserPersistenceError::query("in-memory user store is poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let mut store = self.lock()?;
        store.last_id += 1;
        let user = User::new(UserId::new(store.last_id), draft.clone());
        store.users.insert(user.id(), user.clone());
        Ok(user)
    }

    async fn find(&self) -> Result<Vec<User>, UserPersistenceError> {
        let store = self.lock()?;
        Ok(store.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let store = self.lock()?;
        Ok(store.users.get(&id).cloned())
    }

    async fn update(
        &self,
        id: UserId,
        draft: &UserDraft,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut store = self.lock()?;
        Ok(store.users.get_mut(&id).map(|slot| {
            *slot = User::new(id, draft.clone());
            slot.clone()
        }))
    }

    async fn remove(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut store = self.lock()?;
        Ok(store.users.remove(&id))
    }
}
