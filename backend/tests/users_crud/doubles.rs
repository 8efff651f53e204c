//! Test doubles for the user repository port.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use users_api::domain::ports::{UserPersistenceError, UserRepository};
use users_api::domain::{User, UserDraft, UserId};
use users_api::outbound::memory::InMemoryUserRepository;

/// In-memory repository that counts calls and can be switched into failure.
#[derive(Clone, Default)]
pub(crate) struct RecordingUserRepository {
    inner: Arc<InMemoryUserRepository>,
    calls: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
}

impl RecordingUserRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn fail_every_call(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn record(&self) -> Result<(), UserPersistenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(UserPersistenceError::connection("store offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for RecordingUserRepository {
    async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        self.record()?;
        self.inner.insert(draft).await
    }

    async fn find(&self) -> Result<Vec<User>, UserPersistenceError> {
        self.record()?;
        self.inner.find().await
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        self.record()?;
        self.inner.find_by_id(id).await
    }

    async fn update(
        &self,
        id: UserId,
        draft: &UserDraft,
    ) -> Result<Option<User>, UserPersistenceError> {
        self.record()?;
        self.inner.update(id, draft).await
    }

    async fn remove(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        self.record()?;
        self.inner.remove(id).await
    }
}
