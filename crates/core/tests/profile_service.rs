//! Integration tests for `ProfileService` against an in-memory repository.

mod support;

use std::sync::Arc;

use lodgely_core::ProfileService;
use lodgely_domain::{
    CompletionConfig, Config, LodgelyError, Profile, ProfileImage, ProfileId, SluggableEntity,
    SpokenLanguage, TimestampedEntity, ValidationScenario,
};
use support::registrable_profile;
use support::repositories::InMemoryProfileRepository;

fn service(repo: &InMemoryProfileRepository) -> ProfileService {
    ProfileService::new(Arc::new(repo.clone()), &Config::default())
}

#[tokio::test]
async fn register_saves_profile_with_slug_and_timestamps() -> anyhow::Result<()> {
    let repo = InMemoryProfileRepository::new();
    let service = service(&repo);

    let saved = service.register(registrable_profile("Jane", "jane@example.com")).await?;

    assert_eq!(repo.len(), 1);
    assert!(saved.created_at().is_some());
    assert_eq!(saved.created_at(), saved.updated_at());
    let slug = saved.slug().unwrap_or_default();
    assert!(slug.starts_with("jane-"), "unexpected slug {slug}");

    let loaded = service.get(saved.id()).await?;
    assert_eq!(loaded.email(), "jane@example.com");
    assert_eq!(loaded.username(), "jane@example.com");
    Ok(())
}

#[tokio::test]
async fn register_rejects_invalid_profile() {
    let repo = InMemoryProfileRepository::new();
    let mut profile = registrable_profile("Jane", "not-an-email");
    profile.set_plain_password(Some("123".to_string()));

    let err = service(&repo).register(profile).await.unwrap_err();

    let violations = err.violations();
    assert_eq!(violations.len(), 2);
    assert_eq!(violations[0].field, "email");
    assert_eq!(violations[0].scenario, ValidationScenario::Registration);
    assert_eq!(violations[1].field, "plain_password");
    assert_eq!(violations[1].scenario, ValidationScenario::Default);
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn register_rejects_duplicate_email() -> anyhow::Result<()> {
    let repo = InMemoryProfileRepository::new();
    let service = service(&repo);
    service.register(registrable_profile("Jane", "jane@example.com")).await?;

    let err = service.register(registrable_profile("Janet", "jane@example.com")).await.unwrap_err();

    assert!(matches!(err, LodgelyError::Conflict(_)));
    assert_eq!(repo.len(), 1);
    Ok(())
}

#[tokio::test]
async fn register_rejects_already_registered_profile() -> anyhow::Result<()> {
    let repo = InMemoryProfileRepository::new();
    let service = service(&repo);
    let mut jane = service.register(registrable_profile("Jane", "jane@example.com")).await?;

    jane.set_first_name("Mallory");
    let err = service.register(jane.clone()).await.unwrap_err();

    assert!(matches!(err, LodgelyError::Conflict(_)), "got {err:?}");
    assert_eq!(repo.len(), 1);
    assert_eq!(service.get(jane.id()).await?.first_name(), "Jane");
    Ok(())
}

#[tokio::test]
async fn update_keeps_own_email_and_checks_scenario() -> anyhow::Result<()> {
    let repo = InMemoryProfileRepository::new();
    let service = service(&repo);
    let mut profile = service.register(registrable_profile("Jane", "jane@example.com")).await?;

    profile.set_profession(Some("Architect".to_string()));
    let err = service.update(profile.clone(), ValidationScenario::Profile).await.unwrap_err();
    assert_eq!(err.violations()[0].field, "mother_tongue");

    profile.set_mother_tongue(Some("fr".to_string()));
    let updated = service.update(profile, ValidationScenario::Profile).await?;
    assert_eq!(service.get(updated.id()).await?.profession(), Some("Architect"));
    Ok(())
}

#[tokio::test]
async fn update_rejects_email_of_another_profile() -> anyhow::Result<()> {
    let repo = InMemoryProfileRepository::new();
    let service = service(&repo);
    service.register(registrable_profile("Jane", "jane@example.com")).await?;
    let mut john = service.register(registrable_profile("John", "john@example.com")).await?;

    john.set_email(Some("jane@example.com"));
    let err = service.update(john, ValidationScenario::ProfileContact).await.unwrap_err();

    assert!(matches!(err, LodgelyError::Conflict(_)));
    Ok(())
}

#[tokio::test]
async fn update_unknown_profile_is_not_found() {
    let repo = InMemoryProfileRepository::new();
    let profile = registrable_profile("Jane", "jane@example.com");

    let err = service(&repo).update(profile, ValidationScenario::ProfileContact).await.unwrap_err();

    assert!(matches!(err, LodgelyError::NotFound(_)));
}

#[tokio::test]
async fn delete_and_get_report_missing_profiles() -> anyhow::Result<()> {
    let existing = registrable_profile("Jane", "jane@example.com");
    let id = existing.id();
    let repo = InMemoryProfileRepository::new().with_profile(existing);
    let service = service(&repo);

    service.delete(id).await?;
    assert_eq!(repo.len(), 0);

    assert!(matches!(service.delete(id).await, Err(LodgelyError::NotFound(_))));
    assert!(matches!(service.get(ProfileId::new()).await, Err(LodgelyError::NotFound(_))));
    assert!(service.find_by_email("jane@example.com").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn preferred_locale_uses_configured_site_locales() {
    let repo = InMemoryProfileRepository::new();
    let service = service(&repo);
    let mut profile = Profile::new();

    assert_eq!(service.preferred_locale(&profile), "en");

    profile.add_language(SpokenLanguage::new("de")).add_language(SpokenLanguage::new("fr"));
    assert_eq!(service.preferred_locale(&profile), "fr");

    profile.set_mother_tongue(Some("en".to_string()));
    assert_eq!(service.preferred_locale(&profile), "en");
}

#[test]
fn completion_follows_configured_policy() {
    let repo = InMemoryProfileRepository::new();
    let config = Config {
        completion: CompletionConfig { min_images: 1, strict: false },
        ..Config::default()
    };
    let service = ProfileService::new(Arc::new(repo), &config);
    let mut profile = Profile::new();
    profile.set_description("en", "x".repeat(251)).add_image(ProfileImage::new("a.jpg", 0));

    let info = service.completion(&profile);
    assert_eq!(info.description, 1);
    assert_eq!(info.image, 0);

    profile.add_image(ProfileImage::new("b.jpg", 1));
    assert!(service.completion(&profile).is_complete());
}
