//! Profile service - registration, edition and derived views

use std::sync::Arc;

use chrono::Utc;
use lodgely_domain::{
    CompletionConfig, CompletionInformation, Config, LocaleConfig, LodgelyError, Profile,
    ProfileId, Result, SluggableEntity, TimestampedEntity, ValidationScenario,
};
use tracing::{debug, info, warn};

use super::ports::ProfileRepository;
use super::validation::ProfileValidator;

/// Profile use cases
pub struct ProfileService {
    repository: Arc<dyn ProfileRepository>,
    validator: ProfileValidator,
    locales: LocaleConfig,
    completion: CompletionConfig,
}

impl ProfileService {
    /// Create a new profile service using the locale and completion
    /// settings from `config`
    pub fn new(repository: Arc<dyn ProfileRepository>, config: &Config) -> Self {
        Self {
            repository,
            validator: ProfileValidator::new(),
            locales: config.locales.clone(),
            completion: config.completion.clone(),
        }
    }

    /// Sign up a new member
    ///
    /// Runs the `registration` and `default` rules, rejects a profile that is
    /// already stored or an email or username already in use, then stamps
    /// slug and timestamps before saving.
    pub async fn register(&self, mut profile: Profile) -> Result<Profile> {
        self.validator
            .check(&profile, &[ValidationScenario::Registration, ValidationScenario::Default])?;
        if self.repository.get_by_id(profile.id()).await?.is_some() {
            warn!(profile_id = %profile.id(), "Profile is already registered");
            return Err(LodgelyError::Conflict(format!(
                "profile {} is already registered",
                profile.id()
            )));
        }
        self.ensure_unique_identity(&profile).await?;

        Self::prepare_for_save(&mut profile);
        self.repository.save(&profile).await?;

        info!(profile_id = %profile.id(), "Registered profile");
        Ok(profile)
    }

    /// Save changes made through one of the edition forms
    ///
    /// `scenario` selects the form rules; `default` rules always apply.
    pub async fn update(
        &self,
        mut profile: Profile,
        scenario: ValidationScenario,
    ) -> Result<Profile> {
        let mut scenarios = vec![scenario];
        if scenario != ValidationScenario::Default {
            scenarios.push(ValidationScenario::Default);
        }
        self.validator.check(&profile, &scenarios)?;

        if self.repository.get_by_id(profile.id()).await?.is_none() {
            return Err(LodgelyError::NotFound(format!("profile {}", profile.id())));
        }
        self.ensure_unique_identity(&profile).await?;

        Self::prepare_for_save(&mut profile);
        self.repository.save(&profile).await?;

        info!(profile_id = %profile.id(), scenario = %scenario, "Updated profile");
        Ok(profile)
    }

    /// Load a profile, failing with `NotFound` when it doesn't exist
    pub async fn get(&self, id: ProfileId) -> Result<Profile> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| LodgelyError::NotFound(format!("profile {id}")))
    }

    /// Look a profile up by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Profile>> {
        self.repository.get_by_email(email).await
    }

    /// Delete a profile and everything it owns
    pub async fn delete(&self, id: ProfileId) -> Result<()> {
        if self.repository.delete(id).await? {
            info!(profile_id = %id, "Deleted profile");
            Ok(())
        } else {
            Err(LodgelyError::NotFound(format!("profile {id}")))
        }
    }

    /// Locale to address the member in, among the configured site locales
    pub fn preferred_locale(&self, profile: &Profile) -> String {
        profile.guess_preferred_language(&self.locales.site_locales, &self.locales.default_locale)
    }

    /// Completion indicators under the configured policy
    pub fn completion(&self, profile: &Profile) -> CompletionInformation {
        profile.completion_informations(self.completion.min_images, self.completion.strict)
    }

    async fn ensure_unique_identity(&self, profile: &Profile) -> Result<()> {
        if let Some(other) = self.repository.get_by_email(profile.email()).await? {
            if other.id() != profile.id() {
                warn!(profile_id = %profile.id(), "Email already used by another profile");
                return Err(LodgelyError::Conflict(format!(
                    "email {} is already registered",
                    profile.email()
                )));
            }
        }

        if let Some(other) = self.repository.get_by_username(profile.username()).await? {
            if other.id() != profile.id() {
                warn!(profile_id = %profile.id(), "Username already used by another profile");
                return Err(LodgelyError::Conflict(format!(
                    "username {} is already taken",
                    profile.username()
                )));
            }
        }

        Ok(())
    }

    fn prepare_for_save(profile: &mut Profile) {
        let slug = profile.generate_slug().to_string();
        profile.touch(Utc::now());
        debug!(profile_id = %profile.id(), slug = %slug, "Prepared profile for save");
    }
}
