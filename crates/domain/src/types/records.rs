//! Child records owned by a profile and the relations that tie them to it
//!
//! Each record keeps its back-reference slot crate-private: the slot is
//! written by [`OwnedCollection`](super::OwnedCollection) through the
//! [`Relation`] impls below and read through `owner()`-style getters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::collection::{Record, Relation};
use super::ids::{ProfileId, RecordId};

/* -------------------------------------------------------------------------- */
/* Listings */
/* -------------------------------------------------------------------------- */

/// A rentable listing published by its owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: RecordId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub(crate) owner: Option<ProfileId>,
}

impl Listing {
    /// Create an unattached listing stamped with the current time
    pub fn new(title: impl Into<String>) -> Self {
        Self { id: RecordId::new(), title: title.into(), created_at: Utc::now(), owner: None }
    }

    /// Owning profile
    pub const fn owner(&self) -> Option<ProfileId> {
        self.owner
    }
}

/* -------------------------------------------------------------------------- */
/* Addresses */
/* -------------------------------------------------------------------------- */

/// Postal address of a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileAddress {
    pub id: RecordId,
    pub address: String,
    pub city: String,
    pub zip: String,
    pub country: String,
    pub(crate) owner: Option<ProfileId>,
}

impl ProfileAddress {
    pub fn new(
        address: impl Into<String>,
        city: impl Into<String>,
        zip: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            id: RecordId::new(),
            address: address.into(),
            city: city.into(),
            zip: zip.into(),
            country: country.into(),
            owner: None,
        }
    }

    pub const fn owner(&self) -> Option<ProfileId> {
        self.owner
    }
}

/* -------------------------------------------------------------------------- */
/* Images */
/* -------------------------------------------------------------------------- */

/// Profile picture; lower `position` is shown first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileImage {
    pub id: RecordId,
    pub name: String,
    pub position: u32,
    pub(crate) owner: Option<ProfileId>,
}

impl ProfileImage {
    pub fn new(name: impl Into<String>, position: u32) -> Self {
        Self { id: RecordId::new(), name: name.into(), position, owner: None }
    }

    pub const fn owner(&self) -> Option<ProfileId> {
        self.owner
    }
}

/* -------------------------------------------------------------------------- */
/* Spoken languages */
/* -------------------------------------------------------------------------- */

/// A language the member speaks, identified by its locale code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpokenLanguage {
    pub id: RecordId,
    pub code: String,
    pub(crate) owner: Option<ProfileId>,
}

impl SpokenLanguage {
    pub fn new(code: impl Into<String>) -> Self {
        Self { id: RecordId::new(), code: code.into(), owner: None }
    }

    pub const fn owner(&self) -> Option<ProfileId> {
        self.owner
    }
}

/* -------------------------------------------------------------------------- */
/* Bookings and payments */
/* -------------------------------------------------------------------------- */

/// Booking requested by the profile (the asker)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: RecordId,
    pub listing_id: RecordId,
    pub created_at: DateTime<Utc>,
    pub(crate) asker: Option<ProfileId>,
}

impl Booking {
    pub fn new(listing_id: RecordId) -> Self {
        Self { id: RecordId::new(), listing_id, created_at: Utc::now(), asker: None }
    }

    /// Profile that requested the booking
    pub const fn asker(&self) -> Option<ProfileId> {
        self.asker
    }
}

/// Bank wire paying a booking out to the offerer. Amount in minor units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingBankWire {
    pub id: RecordId,
    pub booking_id: RecordId,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
    pub(crate) owner: Option<ProfileId>,
}

impl BookingBankWire {
    pub fn new(booking_id: RecordId, amount: i64) -> Self {
        Self { id: RecordId::new(), booking_id, amount, created_at: Utc::now(), owner: None }
    }

    pub const fn owner(&self) -> Option<ProfileId> {
        self.owner
    }
}

/// Refund of a booking pay-in to the asker. Amount in minor units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingPayinRefund {
    pub id: RecordId,
    pub booking_id: RecordId,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
    pub(crate) owner: Option<ProfileId>,
}

impl BookingPayinRefund {
    pub fn new(booking_id: RecordId, amount: i64) -> Self {
        Self { id: RecordId::new(), booking_id, amount, created_at: Utc::now(), owner: None }
    }

    pub const fn owner(&self) -> Option<ProfileId> {
        self.owner
    }
}

/* -------------------------------------------------------------------------- */
/* Alerts, messages, reviews */
/* -------------------------------------------------------------------------- */

/// Saved search that notifies the member about new listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingAlert {
    pub id: RecordId,
    pub location: String,
    pub radius_km: u32,
    pub(crate) owner: Option<ProfileId>,
}

impl ListingAlert {
    pub fn new(location: impl Into<String>, radius_km: u32) -> Self {
        Self { id: RecordId::new(), location: location.into(), radius_km, owner: None }
    }

    pub const fn owner(&self) -> Option<ProfileId> {
        self.owner
    }
}

/// Message written by the profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: RecordId,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub(crate) sender: Option<ProfileId>,
}

impl Message {
    pub fn new(body: impl Into<String>) -> Self {
        Self { id: RecordId::new(), body: body.into(), created_at: Utc::now(), sender: None }
    }

    pub const fn sender(&self) -> Option<ProfileId> {
        self.sender
    }
}

/// Review written by one member about another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: RecordId,
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub(crate) reviewer: Option<ProfileId>,
    pub(crate) reviewee: Option<ProfileId>,
}

impl Review {
    pub fn new(rating: u8, comment: impl Into<String>) -> Self {
        Self {
            id: RecordId::new(),
            rating,
            comment: comment.into(),
            created_at: Utc::now(),
            reviewer: None,
            reviewee: None,
        }
    }

    /// Author of the review
    pub const fn reviewer(&self) -> Option<ProfileId> {
        self.reviewer
    }

    /// Member the review is about
    pub const fn reviewee(&self) -> Option<ProfileId> {
        self.reviewee
    }
}

/// External social login linked to the profile (at most one)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialAccount {
    pub id: RecordId,
    pub provider: String,
    pub external_id: String,
    pub(crate) owner: Option<ProfileId>,
}

impl SocialAccount {
    pub fn new(provider: impl Into<String>, external_id: impl Into<String>) -> Self {
        Self {
            id: RecordId::new(),
            provider: provider.into(),
            external_id: external_id.into(),
            owner: None,
        }
    }

    pub const fn owner(&self) -> Option<ProfileId> {
        self.owner
    }
}

/* -------------------------------------------------------------------------- */
/* Relations */
/* -------------------------------------------------------------------------- */

macro_rules! impl_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Record for $ty {
                fn record_id(&self) -> RecordId {
                    self.id
                }
            }
        )+
    };
}

impl_record!(
    Listing,
    ProfileAddress,
    ProfileImage,
    SpokenLanguage,
    Booking,
    BookingBankWire,
    BookingPayinRefund,
    ListingAlert,
    Message,
    Review,
);

macro_rules! relation {
    ($(#[$meta:meta])* $marker:ident, $item:ty, $slot:ident, $name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $marker;

        impl Relation for $marker {
            type Item = $item;
            const NAME: &'static str = $name;

            fn owner(item: &Self::Item) -> Option<ProfileId> {
                item.$slot
            }

            fn set_owner(item: &mut Self::Item, owner: Option<ProfileId>) {
                item.$slot = owner;
            }
        }
    };
}

relation!(
    /// Listings published by the profile
    Listings, Listing, owner, "listings"
);
relation!(
    /// Postal addresses
    Addresses, ProfileAddress, owner, "addresses"
);
relation!(
    /// Profile pictures
    Images, ProfileImage, owner, "images"
);
relation!(
    /// Spoken languages
    Languages, SpokenLanguage, owner, "languages"
);
relation!(
    /// Bookings made as asker
    Bookings, Booking, asker, "bookings"
);
relation!(
    /// Bank wires paid to the profile
    BankWires, BookingBankWire, owner, "booking_bank_wires"
);
relation!(
    /// Pay-in refunds issued to the profile
    PayinRefunds, BookingPayinRefund, owner, "booking_payin_refunds"
);
relation!(
    /// Listing alerts
    ListingAlerts, ListingAlert, owner, "listing_alerts"
);
relation!(
    /// Messages sent
    SentMessages, Message, sender, "messages"
);
relation!(
    /// Reviews written by the profile
    ReviewsGiven, Review, reviewer, "reviews_by"
);
relation!(
    /// Reviews written about the profile
    ReviewsReceived, Review, reviewee, "reviews_to"
);
