//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Profile defaults applied at construction
pub const DEFAULT_PHONE_PREFIX: &str = "+33";
pub const DEFAULT_NATIONALITY: &str = "FR";
pub const DEFAULT_COUNTRY_OF_RESIDENCE: &str = "FR";
pub const DEFAULT_TRANSLATION_LOCALE: &str = "en";

// Completion heuristic
pub const LENIENT_DESCRIPTION_MIN_CHARS: usize = 250;

// Column limits
pub const MAX_EMAIL_LENGTH: usize = 255;
pub const MIN_EMAIL_LENGTH: usize = 3;
pub const MAX_NAME_LENGTH: usize = 100;
pub const MIN_NAME_LENGTH: usize = 3;
pub const MAX_PHONE_PREFIX_LENGTH: usize = 6;
pub const MAX_PHONE_LENGTH: usize = 16;
pub const MAX_COUNTRY_CODE_LENGTH: usize = 3;
pub const MAX_PROFESSION_LENGTH: usize = 50;
pub const MAX_IBAN_LENGTH: usize = 45;
pub const MAX_BIC_LENGTH: usize = 25;
pub const MAX_BANK_OWNER_NAME_LENGTH: usize = 100;
pub const MAX_BANK_OWNER_ADDRESS_LENGTH: usize = 255;
pub const MAX_MOTHER_TONGUE_LENGTH: usize = 5;
pub const MIN_PASSWORD_LENGTH: usize = 6;

// Fees and ratings are percentages
pub const MIN_PERCENT: i16 = 0;
pub const MAX_PERCENT: i16 = 100;

// Slug generation
pub const SLUG_SEPARATOR: char = '-';
