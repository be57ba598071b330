//! Mock repository implementations for testing
//!
//! In-memory stand-ins for the core repository ports so service tests run
//! without a database.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use lodgely_core::ProfileRepository;
use lodgely_domain::{Profile, ProfileId, Result as DomainResult};
use parking_lot::Mutex;

/// In-memory mock for `ProfileRepository`.
///
/// Clones share the same storage, so a test can keep a handle and inspect
/// what the service saved.
#[derive(Default, Clone)]
pub struct InMemoryProfileRepository {
    profiles: Arc<Mutex<HashMap<ProfileId, Profile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the mock with an already persisted profile.
    pub fn with_profile(self, profile: Profile) -> Self {
        self.profiles.lock().insert(profile.id(), profile);
        self
    }

    pub fn len(&self) -> usize {
        self.profiles.lock().len()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get_by_id(&self, id: ProfileId) -> DomainResult<Option<Profile>> {
        Ok(self.profiles.lock().get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> DomainResult<Option<Profile>> {
        Ok(self.profiles.lock().values().find(|p| p.email() == email).cloned())
    }

    async fn get_by_username(&self, username: &str) -> DomainResult<Option<Profile>> {
        Ok(self.profiles.lock().values().find(|p| p.username() == username).cloned())
    }

    async fn save(&self, profile: &Profile) -> DomainResult<()> {
        self.profiles.lock().insert(profile.id(), profile.clone());
        Ok(())
    }

    async fn delete(&self, id: ProfileId) -> DomainResult<bool> {
        Ok(self.profiles.lock().remove(&id).is_some())
    }
}
