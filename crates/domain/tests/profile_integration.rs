//! Integration tests for the profile model
//!
//! Covers naming, email mirroring, completion heuristics, language guessing
//! and the owner back-reference guarantees of relationship collections.

use lodgely_domain::{
    Booking, Listing, Message, Profile, ProfileImage, RecordId, Review, SpokenLanguage,
    TranslatableEntity,
};

fn profile_with_images(count: u32) -> Profile {
    let mut profile = Profile::new();
    profile.set_images((0..count).map(|i| ProfileImage::new(format!("{i}.jpg"), i)));
    profile
}

// ============================================================================
// Names and identity
// ============================================================================

#[test]
fn test_full_name_skips_empty_parts() {
    let mut profile = Profile::new();
    assert_eq!(profile.full_name(), "");

    profile.set_first_name("Jane");
    assert_eq!(profile.full_name(), "Jane");

    profile.set_last_name("Doe");
    assert_eq!(profile.full_name(), "Jane Doe");

    profile.set_first_name("");
    assert_eq!(profile.full_name(), "Doe");
}

#[test]
fn test_set_email_mirrors_username() {
    let mut profile = Profile::new();

    profile.set_email(Some("jane@example.com"));
    assert_eq!(profile.email(), "jane@example.com");
    assert_eq!(profile.username(), "jane@example.com");

    profile.set_email(None);
    assert_eq!(profile.email(), "");
    assert_eq!(profile.username(), "");
}

// ============================================================================
// Completion indicators
// ============================================================================

#[test]
fn test_strict_completion() {
    let mut profile = profile_with_images(2);
    let info = profile.completion_informations(3, true);
    assert_eq!((info.description, info.image), (0, 0));

    profile.set_description("en", "Hi");
    profile.add_image(ProfileImage::new("extra.jpg", 9));
    let info = profile.completion_informations(3, true);
    assert_eq!((info.description, info.image), (1, 1));
    assert!(info.is_complete());
}

#[test]
fn test_lenient_completion_requires_strictly_more() {
    let mut profile = profile_with_images(3);
    profile.set_description("en", "x".repeat(250));

    let info = profile.completion_informations(3, false);
    assert_eq!((info.description, info.image), (0, 0));

    profile.set_description("en", "x".repeat(251));
    profile.add_image(ProfileImage::new("fourth.jpg", 4));
    let info = profile.completion_informations(3, false);
    assert_eq!((info.description, info.image), (1, 1));
}

#[test]
fn test_lenient_completion_counts_characters() {
    let mut profile = Profile::new();
    // 250 characters but 500 bytes
    profile.set_description("en", "é".repeat(250));

    assert_eq!(profile.completion_informations(0, false).description, 0);
}

#[test]
fn test_completion_reads_current_locale_description() {
    let mut profile = profile_with_images(1);
    profile.set_description("fr", "Bonjour");
    profile.set_current_locale(Some("fr".to_string()));

    assert_eq!(profile.completion_informations(1, true).description, 1);
}

// ============================================================================
// Preferred language
// ============================================================================

#[test]
fn test_mother_tongue_wins_when_supported() {
    let mut profile = Profile::new();
    profile.set_mother_tongue(Some("en".to_string()));
    profile.add_language(SpokenLanguage::new("fr"));

    assert_eq!(profile.guess_preferred_language(&["fr", "en"], "fr"), "en");
}

#[test]
fn test_first_supported_spoken_language() {
    let mut profile = Profile::new();
    profile.set_mother_tongue(Some("de".to_string()));
    profile.add_language(SpokenLanguage::new("es")).add_language(SpokenLanguage::new("fr"));

    assert_eq!(profile.guess_preferred_language(&["fr", "en"], "en"), "fr");
}

#[test]
fn test_default_locale_fallback() {
    let profile = Profile::new();
    let site_locales: Vec<String> = vec!["fr".into(), "en".into()];

    assert_eq!(profile.guess_preferred_language(&site_locales, "fr"), "fr");
}

#[test]
fn test_unsupported_mother_tongue_without_languages_falls_back_to_default() {
    let mut profile = Profile::new();
    profile.set_mother_tongue(Some("de".to_string()));

    assert!(profile.languages().is_empty());
    assert_eq!(profile.guess_preferred_language(&["fr", "en"], "en"), "en");
}

#[test]
fn test_empty_mother_tongue_is_ignored() {
    let mut profile = Profile::new();
    profile.set_mother_tongue(Some(String::new()));

    // Even a locale list carrying an empty entry never yields ""
    assert_eq!(profile.guess_preferred_language(&["", "fr"], "fr"), "fr");

    profile.add_language(SpokenLanguage::new("en"));
    assert_eq!(profile.guess_preferred_language(&["", "en"], "fr"), "en");
}

// ============================================================================
// Relationship collections
// ============================================================================

#[test]
fn test_add_keeps_duplicates() {
    let mut profile = Profile::new();
    let listing = Listing::new("Loft in Paris");

    profile.add_listing(listing.clone()).add_listing(listing);

    assert_eq!(profile.listings().len(), 2);
}

#[test]
fn test_remove_missing_item_is_noop() {
    let mut profile = Profile::new();
    profile.add_message(Message::new("hello"));

    assert!(profile.remove_message(&Message::new("never added")).is_none());
    assert_eq!(profile.messages().len(), 1);
}

#[test]
fn test_remove_returns_detached_item() {
    let mut profile = Profile::new();
    let booking = Booking::new(RecordId::new());
    profile.add_booking(booking.clone());

    let removed = profile.remove_booking(&booking).expect("booking was added");

    assert_eq!(removed.asker(), None);
    assert!(profile.bookings().is_empty());
}

#[test]
fn test_back_references_point_at_owner() {
    let mut profile = Profile::new();
    let id = profile.id();

    profile.add_listing(Listing::new("Cabin"));
    profile.add_message(Message::new("hi"));
    profile.add_review_by(Review::new(5, "great host"));
    profile.set_reviews_to(vec![Review::new(4, "nice guest"), Review::new(3, "ok")]);

    assert_eq!(profile.listings()[0].owner(), Some(id));
    assert_eq!(profile.messages()[0].sender(), Some(id));
    assert_eq!(profile.reviews_by()[0].reviewer(), Some(id));
    assert!(profile.reviews_to().iter().all(|r| r.reviewee() == Some(id)));
    assert!(profile.reviews_to().iter().all(|r| r.reviewer().is_none()));
    assert!(profile.owns_all_children());
}

#[test]
fn test_moving_record_between_profiles() {
    let mut alice = Profile::new();
    let mut bob = Profile::new();
    let listing = Listing::new("Studio");
    alice.add_listing(listing.clone());

    let moved = alice.remove_listing(&listing).expect("listing was added");
    bob.add_listing(moved);

    assert!(alice.listings().is_empty());
    assert_eq!(bob.listings()[0].owner(), Some(bob.id()));
}

#[test]
fn test_replace_returns_previous_records_detached() {
    let mut profile = Profile::new();
    profile.add_language(SpokenLanguage::new("fr"));

    let previous = profile.set_languages(vec![SpokenLanguage::new("en")]);

    assert_eq!(previous.len(), 1);
    assert_eq!(previous[0].owner(), None);
    assert_eq!(profile.languages()[0].code, "en");
    assert_eq!(profile.languages()[0].owner(), Some(profile.id()));
}

#[test]
fn test_serde_round_trip_keeps_children() {
    let mut profile = Profile::new();
    profile.set_email(Some("jane@example.com")).set_first_name("Jane");
    profile.add_listing(Listing::new("Cabin"));
    profile.set_plain_password(Some("secret".to_string()));

    let json = serde_json::to_string(&profile).expect("serialize");
    let restored: Profile = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored.id(), profile.id());
    assert_eq!(restored.listings().len(), 1);
    assert!(restored.owns_all_children());
    assert_eq!(restored.plain_password(), None);
}
