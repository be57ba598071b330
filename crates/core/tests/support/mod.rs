//! Shared test helpers for `lodgely-core` integration tests.

pub mod repositories;

use chrono::NaiveDate;
use lodgely_domain::Profile;

/// A profile that passes the registration rules
pub fn registrable_profile(first_name: &str, email: &str) -> Profile {
    let mut profile = Profile::new();
    profile
        .set_email(Some(email))
        .set_first_name(first_name)
        .set_last_name("Martin")
        .set_birthday(NaiveDate::from_ymd_opt(1988, 6, 1));
    profile
}
