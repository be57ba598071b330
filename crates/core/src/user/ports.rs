//! Port interfaces for member profile management
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations for profile operations.

use async_trait::async_trait;
use lodgely_domain::{Profile, ProfileId, Result};

/// Trait for member profile persistence and retrieval
///
/// Implementations persist the profile together with every record it owns
/// and return loaded profiles with their collections in presentation order.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Get profile by ID
    async fn get_by_id(&self, id: ProfileId) -> Result<Option<Profile>>;

    /// Get profile by email
    async fn get_by_email(&self, email: &str) -> Result<Option<Profile>>;

    /// Get profile by login identifier
    async fn get_by_username(&self, username: &str) -> Result<Option<Profile>>;

    /// Insert or update a profile, replacing the records it owns
    ///
    /// Returns `LodgelyError::Conflict` when another profile already uses
    /// the email or username.
    async fn save(&self, profile: &Profile) -> Result<()>;

    /// Delete a profile and everything it owns
    ///
    /// Returns `false` when no profile had that ID.
    async fn delete(&self, id: ProfileId) -> Result<bool>;
}
