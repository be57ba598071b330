//! Domain types and models

pub mod capabilities;
pub mod collection;
pub mod completion;
pub mod ids;
pub mod profile;
pub mod records;
pub mod validation;

pub use capabilities::{SluggableEntity, TimestampedEntity, TranslatableEntity};
pub use collection::{OwnedCollection, Record, Relation};
pub use completion::CompletionInformation;
pub use ids::{ProfileId, RecordId};
pub use profile::{Profile, ProfileTranslation};
pub use records::{
    Addresses, BankWires, Booking, BookingBankWire, BookingPayinRefund, Bookings, Images,
    Languages, Listing, ListingAlert, ListingAlerts, Listings, Message, PayinRefunds,
    ProfileAddress, ProfileImage, Review, ReviewsGiven, ReviewsReceived, SentMessages,
    SocialAccount, SpokenLanguage,
};
pub use validation::{ValidationScenario, Violation};
