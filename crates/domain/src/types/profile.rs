//! Marketplace member profile
//!
//! [`Profile`] holds a member's attributes and owns every record that hangs
//! off the member (listings, bookings, messages, reviews, ...). It performs
//! no validation and no I/O; validators and repositories work on it from the
//! outside.
//!
//! Child records point back at their owner by [`ProfileId`]. Collections are
//! only reachable read-only; the `add_*`, `remove_*` and `set_*` methods are
//! the single way to change them, and they keep the back-references in step.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::capabilities::{SluggableEntity, TimestampedEntity, TranslatableEntity};
use super::collection::{OwnedCollection, Record, Relation};
use super::completion::CompletionInformation;
use super::ids::ProfileId;
use super::records::{
    Addresses, BankWires, Booking, BookingBankWire, BookingPayinRefund, Bookings, Images,
    Languages, Listing, ListingAlert, ListingAlerts, Listings, Message, PayinRefunds,
    ProfileAddress, ProfileImage, Review, ReviewsGiven, ReviewsReceived, SentMessages,
    SocialAccount, SpokenLanguage,
};
use crate::constants::{
    DEFAULT_COUNTRY_OF_RESIDENCE, DEFAULT_NATIONALITY, DEFAULT_PHONE_PREFIX,
    DEFAULT_TRANSLATION_LOCALE, LENIENT_DESCRIPTION_MIN_CHARS,
};

/// Per-locale text of a profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileTranslation {
    pub description: String,
}

fn default_translation_locale() -> String {
    DEFAULT_TRANSLATION_LOCALE.to_string()
}

/// A marketplace member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    id: ProfileId,

    // Login identity
    username: String,
    email: String,
    enabled: bool,
    #[serde(skip)]
    plain_password: Option<String>,
    last_login: Option<DateTime<Utc>>,

    // Personal
    first_name: String,
    last_name: String,
    phone_prefix: Option<String>,
    phone: Option<String>,
    birthday: Option<NaiveDate>,
    nationality: Option<String>,
    country_of_residence: Option<String>,
    profession: Option<String>,

    // Financial
    iban: Option<String>,
    bic: Option<String>,
    bank_owner_name: Option<String>,
    bank_owner_address: Option<String>,
    annual_income: Option<i64>,

    // Verification
    phone_verified: bool,
    email_verified: bool,
    id_card_verified: bool,

    // Reputation
    nb_bookings_offerer: u32,
    nb_bookings_asker: u32,
    fee_as_asker: Option<i16>,
    fee_as_offerer: Option<i16>,
    average_asker_rating: Option<i16>,
    average_offerer_rating: Option<i16>,

    mother_tongue: Option<String>,
    /// Average time to answer a booking request, in minutes
    answer_delay: Option<i32>,

    slug: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    translations: BTreeMap<String, ProfileTranslation>,
    #[serde(skip)]
    current_locale: Option<String>,
    #[serde(default = "default_translation_locale")]
    default_locale: String,

    #[serde(default)]
    listings: OwnedCollection<Listings>,
    #[serde(default)]
    addresses: OwnedCollection<Addresses>,
    #[serde(default)]
    images: OwnedCollection<Images>,
    #[serde(default)]
    languages: OwnedCollection<Languages>,
    #[serde(default)]
    bookings: OwnedCollection<Bookings>,
    #[serde(default)]
    booking_bank_wires: OwnedCollection<BankWires>,
    #[serde(default)]
    booking_payin_refunds: OwnedCollection<PayinRefunds>,
    #[serde(default)]
    listing_alerts: OwnedCollection<ListingAlerts>,
    #[serde(default)]
    messages: OwnedCollection<SentMessages>,
    #[serde(default)]
    reviews_by: OwnedCollection<ReviewsGiven>,
    #[serde(default)]
    reviews_to: OwnedCollection<ReviewsReceived>,
    #[serde(default)]
    social_account: Option<SocialAccount>,
}

impl Default for Profile {
    fn default() -> Self {
        Self::new()
    }
}

impl Profile {
    /// Empty profile with a fresh id, empty collections and the marketplace
    /// defaults for phone prefix, nationality and country of residence
    pub fn new() -> Self {
        Self::with_id(ProfileId::new())
    }

    /// Empty profile with a known id
    pub fn with_id(id: ProfileId) -> Self {
        Self {
            id,
            username: String::new(),
            email: String::new(),
            enabled: false,
            plain_password: None,
            last_login: None,
            first_name: String::new(),
            last_name: String::new(),
            phone_prefix: Some(DEFAULT_PHONE_PREFIX.to_string()),
            phone: None,
            birthday: None,
            nationality: Some(DEFAULT_NATIONALITY.to_string()),
            country_of_residence: Some(DEFAULT_COUNTRY_OF_RESIDENCE.to_string()),
            profession: None,
            iban: None,
            bic: None,
            bank_owner_name: None,
            bank_owner_address: None,
            annual_income: None,
            phone_verified: false,
            email_verified: false,
            id_card_verified: false,
            nb_bookings_offerer: 0,
            nb_bookings_asker: 0,
            fee_as_asker: None,
            fee_as_offerer: None,
            average_asker_rating: None,
            average_offerer_rating: None,
            mother_tongue: None,
            answer_delay: None,
            slug: None,
            created_at: None,
            updated_at: None,
            translations: BTreeMap::new(),
            current_locale: None,
            default_locale: default_translation_locale(),
            listings: OwnedCollection::default(),
            addresses: OwnedCollection::default(),
            images: OwnedCollection::default(),
            languages: OwnedCollection::default(),
            bookings: OwnedCollection::default(),
            booking_bank_wires: OwnedCollection::default(),
            booking_payin_refunds: OwnedCollection::default(),
            listing_alerts: OwnedCollection::default(),
            messages: OwnedCollection::default(),
            reviews_by: OwnedCollection::default(),
            reviews_to: OwnedCollection::default(),
            social_account: None,
        }
    }

    pub const fn id(&self) -> ProfileId {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Set the email and mirror it into the login identifier.
    ///
    /// `None` is stored as an empty string, so email and username always
    /// stay identical.
    pub fn set_email(&mut self, email: Option<&str>) -> &mut Self {
        let email = email.unwrap_or_default();
        self.email = email.to_string();
        self.username = email.to_string();
        self
    }

    /// First and last name joined by a space, skipping empty parts
    pub fn full_name(&self) -> String {
        join_non_empty(&[self.first_name.as_str(), self.last_name.as_str()])
    }

    /// Public short name: first name and last-name initial, e.g. `Jane D.`
    ///
    /// An empty last name yields the first name alone.
    pub fn display_name(&self) -> String {
        let initial = self
            .last_name
            .chars()
            .next()
            .map(|c| format!("{}.", c.to_uppercase()))
            .unwrap_or_default();
        join_non_empty(&[self.first_name.as_str(), initial.as_str()])
    }

    /// Description in the current locale, falling back to the default locale
    pub fn description(&self) -> &str {
        self.translate(None).map_or("", |t| t.description.as_str())
    }

    /// Description for a given locale, falling back to the default locale
    pub fn description_in(&self, locale: &str) -> &str {
        self.translate(Some(locale)).map_or("", |t| t.description.as_str())
    }

    pub fn set_description(&mut self, locale: &str, description: impl Into<String>) -> &mut Self {
        self.translate_mut(locale).description = description.into();
        self
    }

    /// Completeness indicators for the description and the picture gallery.
    ///
    /// Strict mode asks for any description and at least `min_images`
    /// pictures; lenient mode asks for a description longer than 250
    /// characters and strictly more than `min_images` pictures.
    pub fn completion_informations(&self, min_images: usize, strict: bool) -> CompletionInformation {
        let description = self.description();
        let image_count = self.images.len();

        let description_complete = if strict {
            !description.is_empty()
        } else {
            description.chars().count() > LENIENT_DESCRIPTION_MIN_CHARS
        };
        let images_complete =
            if strict { image_count >= min_images } else { image_count > min_images };

        CompletionInformation::from_flags(description_complete, images_complete)
    }

    /// Best locale to address this member in.
    ///
    /// The mother tongue wins when the site supports it; otherwise the first
    /// spoken language (in stored order) the site supports; otherwise
    /// `default_locale`.
    pub fn guess_preferred_language<S: AsRef<str>>(
        &self,
        site_locales: &[S],
        default_locale: &str,
    ) -> String {
        let supported = |code: &str| site_locales.iter().any(|locale| locale.as_ref() == code);

        if let Some(mother_tongue) = self.mother_tongue.as_deref() {
            if !mother_tongue.is_empty() && supported(mother_tongue) {
                return mother_tongue.to_string();
            }
        }

        self.languages
            .iter()
            .map(|language| language.code.as_str())
            .find(|code| supported(code))
            .unwrap_or(default_locale)
            .to_string()
    }

    /// Linked social account, if any
    pub const fn social_account(&self) -> Option<&SocialAccount> {
        self.social_account.as_ref()
    }

    /// Link a social account, returning the previously linked one detached
    pub fn set_social_account(&mut self, mut account: SocialAccount) -> Option<SocialAccount> {
        account.owner = Some(self.id);
        self.social_account.replace(account).map(detach_social_account)
    }

    /// Unlink the social account and return it detached
    pub fn take_social_account(&mut self) -> Option<SocialAccount> {
        self.social_account.take().map(detach_social_account)
    }

    /// Whether every owned record points back at this profile
    pub fn owns_all_children(&self) -> bool {
        self.listings.is_owned_by(self.id)
            && self.addresses.is_owned_by(self.id)
            && self.images.is_owned_by(self.id)
            && self.languages.is_owned_by(self.id)
            && self.bookings.is_owned_by(self.id)
            && self.booking_bank_wires.is_owned_by(self.id)
            && self.booking_payin_refunds.is_owned_by(self.id)
            && self.listing_alerts.is_owned_by(self.id)
            && self.messages.is_owned_by(self.id)
            && self.reviews_by.is_owned_by(self.id)
            && self.reviews_to.is_owned_by(self.id)
            && self.social_account.as_ref().map_or(true, |a| a.owner == Some(self.id))
    }

    /// Sort collections the way they are presented: pictures by position,
    /// dated records newest first
    pub fn apply_presentation_order(&mut self) {
        self.images.sort_by(|a, b| a.position.cmp(&b.position));
        self.listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        self.bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        self.booking_bank_wires.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        self.booking_payin_refunds.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    }

    pub fn plain_password(&self) -> Option<&str> {
        self.plain_password.as_deref()
    }

    pub fn set_plain_password(&mut self, password: Option<String>) -> &mut Self {
        self.plain_password = password;
        self
    }
}

fn detach_social_account(mut account: SocialAccount) -> SocialAccount {
    account.owner = None;
    account
}

fn join_non_empty(parts: &[&str]) -> String {
    parts.iter().filter(|part| !part.is_empty()).copied().collect::<Vec<_>>().join(" ")
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

/* -------------------------------------------------------------------------- */
/* Scalar accessors */
/* -------------------------------------------------------------------------- */

macro_rules! string_accessors {
    ($($field:ident, $setter:ident;)+) => {
        impl Profile {
            $(
                pub fn $field(&self) -> &str {
                    &self.$field
                }

                pub fn $setter(&mut self, value: impl Into<String>) -> &mut Self {
                    self.$field = value.into();
                    self
                }
            )+
        }
    };
}

macro_rules! optional_string_accessors {
    ($($field:ident, $setter:ident;)+) => {
        impl Profile {
            $(
                pub fn $field(&self) -> Option<&str> {
                    self.$field.as_deref()
                }

                pub fn $setter(&mut self, value: Option<String>) -> &mut Self {
                    self.$field = value;
                    self
                }
            )+
        }
    };
}

macro_rules! value_accessors {
    ($($field:ident: $ty:ty, $setter:ident;)+) => {
        impl Profile {
            $(
                pub const fn $field(&self) -> $ty {
                    self.$field
                }

                pub fn $setter(&mut self, value: $ty) -> &mut Self {
                    self.$field = value;
                    self
                }
            )+
        }
    };
}

string_accessors! {
    username, set_username;
    first_name, set_first_name;
    last_name, set_last_name;
}

optional_string_accessors! {
    phone_prefix, set_phone_prefix;
    phone, set_phone;
    nationality, set_nationality;
    country_of_residence, set_country_of_residence;
    profession, set_profession;
    iban, set_iban;
    bic, set_bic;
    bank_owner_name, set_bank_owner_name;
    bank_owner_address, set_bank_owner_address;
    mother_tongue, set_mother_tongue;
}

value_accessors! {
    enabled: bool, set_enabled;
    last_login: Option<DateTime<Utc>>, set_last_login;
    birthday: Option<NaiveDate>, set_birthday;
    annual_income: Option<i64>, set_annual_income;
    phone_verified: bool, set_phone_verified;
    email_verified: bool, set_email_verified;
    id_card_verified: bool, set_id_card_verified;
    nb_bookings_offerer: u32, set_nb_bookings_offerer;
    nb_bookings_asker: u32, set_nb_bookings_asker;
    fee_as_asker: Option<i16>, set_fee_as_asker;
    fee_as_offerer: Option<i16>, set_fee_as_offerer;
    average_asker_rating: Option<i16>, set_average_asker_rating;
    average_offerer_rating: Option<i16>, set_average_offerer_rating;
    answer_delay: Option<i32>, set_answer_delay;
}

/* -------------------------------------------------------------------------- */
/* Relationship collections */
/* -------------------------------------------------------------------------- */

macro_rules! collection_accessors {
    ($($field:ident: $relation:ty, $item:ty => $add:ident, $remove:ident, $set:ident;)+) => {
        impl Profile {
            $(
                /// Read-only view of the collection
                pub const fn $field(&self) -> &OwnedCollection<$relation> {
                    &self.$field
                }

                /// Point `item` at this profile and append it (duplicates kept)
                pub fn $add(&mut self, item: $item) -> &mut Self {
                    self.$field.push_owned(self.id, item);
                    self
                }

                /// Remove the first entry with the same id and return it detached
                pub fn $remove(&mut self, item: &$item) -> Option<$item> {
                    self.$field.remove_first(item.record_id())
                }

                /// Replace the collection, returning the previous entries detached
                pub fn $set<I>(&mut self, items: I) -> Vec<$item>
                where
                    I: IntoIterator<Item = $item>,
                {
                    self.$field.replace_owned(self.id, items)
                }
            )+

            /// Names of every relationship collection
            pub const RELATION_NAMES: &'static [&'static str] =
                &[$(<$relation as Relation>::NAME,)+];
        }
    };
}

collection_accessors! {
    listings: Listings, Listing => add_listing, remove_listing, set_listings;
    addresses: Addresses, ProfileAddress => add_address, remove_address, set_addresses;
    images: Images, ProfileImage => add_image, remove_image, set_images;
    languages: Languages, SpokenLanguage => add_language, remove_language, set_languages;
    bookings: Bookings, Booking => add_booking, remove_booking, set_bookings;
    booking_bank_wires: BankWires, BookingBankWire
        => add_booking_bank_wire, remove_booking_bank_wire, set_booking_bank_wires;
    booking_payin_refunds: PayinRefunds, BookingPayinRefund
        => add_booking_payin_refund, remove_booking_payin_refund, set_booking_payin_refunds;
    listing_alerts: ListingAlerts, ListingAlert
        => add_listing_alert, remove_listing_alert, set_listing_alerts;
    messages: SentMessages, Message => add_message, remove_message, set_messages;
    reviews_by: ReviewsGiven, Review => add_review_by, remove_review_by, set_reviews_by;
    reviews_to: ReviewsReceived, Review => add_review_to, remove_review_to, set_reviews_to;
}

/* -------------------------------------------------------------------------- */
/* Capabilities */
/* -------------------------------------------------------------------------- */

impl TimestampedEntity for Profile {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    fn set_created_at(&mut self, at: DateTime<Utc>) {
        self.created_at = Some(at);
    }

    fn set_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }
}

impl SluggableEntity for Profile {
    fn sluggable_fields(&self) -> Vec<String> {
        vec![self.first_name.clone(), self.id.to_string()]
    }

    fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    fn set_slug(&mut self, slug: String) {
        self.slug = Some(slug);
    }
}

impl TranslatableEntity for Profile {
    type Translation = ProfileTranslation;

    fn translations(&self) -> &BTreeMap<String, ProfileTranslation> {
        &self.translations
    }

    fn translations_mut(&mut self) -> &mut BTreeMap<String, ProfileTranslation> {
        &mut self.translations
    }

    fn current_locale(&self) -> Option<&str> {
        self.current_locale.as_deref()
    }

    fn set_current_locale(&mut self, locale: Option<String>) {
        self.current_locale = locale;
    }

    fn default_locale(&self) -> &str {
        &self.default_locale
    }
}
