// Field Validators - Reusable validation components
use std::fmt::{self, Display};

use once_cell::sync::Lazy;

/// Why a value was rejected
///
/// `code` is a stable key callers can translate; `message` is a readable
/// fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub code: &'static str,
    pub message: String,
}

impl Rejection {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

impl Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Trait for field validators
pub trait FieldValidator<T: ?Sized> {
    /// Validate a field value
    fn validate(&self, value: &T) -> Result<(), Rejection>;
}

/// Inclusive range validator for numeric types
#[derive(Debug, Clone)]
pub struct RangeValidator<T> {
    min: T,
    max: T,
}

impl<T> RangeValidator<T>
where
    T: PartialOrd + Display,
{
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T> FieldValidator<T> for RangeValidator<T>
where
    T: PartialOrd + Display,
{
    fn validate(&self, value: &T) -> Result<(), Rejection> {
        if *value < self.min {
            return Err(Rejection::new("too_low", format!("Value must be at least {}", self.min)));
        }
        if *value > self.max {
            return Err(Rejection::new(
                "too_high",
                format!("Value must not exceed {}", self.max),
            ));
        }
        Ok(())
    }
}

/// String length validator
///
/// Lengths are counted in characters, not bytes.
#[derive(Debug, Clone)]
pub struct StringValidator {
    min_length: Option<usize>,
    max_length: Option<usize>,
    trim: bool,
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl StringValidator {
    /// Create a new string validator
    pub fn new() -> Self {
        Self { min_length: None, max_length: None, trim: true }
    }

    /// Set minimum length
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Set maximum length
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Set whether to trim before validation
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

impl FieldValidator<str> for StringValidator {
    fn validate(&self, value: &str) -> Result<(), Rejection> {
        let val = if self.trim { value.trim() } else { value };
        let length = val.chars().count();

        if let Some(min) = self.min_length {
            if length < min {
                return Err(Rejection::new(
                    "too_short",
                    format!("Length must be at least {} characters", min),
                ));
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return Err(Rejection::new(
                    "too_long",
                    format!("Length must not exceed {} characters", max),
                ));
            }
        }

        Ok(())
    }
}

impl FieldValidator<String> for StringValidator {
    fn validate(&self, value: &String) -> Result<(), Rejection> {
        FieldValidator::<str>::validate(self, value.as_str())
    }
}

/// Static email regex pattern compiled once at first use
static EMAIL_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("EMAIL_REGEX pattern is valid and well-formed")
});

/// Email validator
#[derive(Debug, Clone, Default)]
pub struct EmailValidator;

impl EmailValidator {
    pub fn new() -> Self {
        Self
    }
}

impl FieldValidator<str> for EmailValidator {
    fn validate(&self, value: &str) -> Result<(), Rejection> {
        if !EMAIL_REGEX.is_match(value) {
            return Err(Rejection::new("invalid_email", "Invalid email format"));
        }

        Ok(())
    }
}

/// Shortest and longest IBANs issued by any country
const IBAN_MIN_LENGTH: usize = 15;
const IBAN_MAX_LENGTH: usize = 34;

/// International bank account number validator (ISO 13616)
///
/// Spaces are ignored and letters are case-insensitive. The value must start
/// with a two-letter country code and two check digits, and pass the mod-97
/// checksum.
#[derive(Debug, Clone, Default)]
pub struct IbanValidator;

impl IbanValidator {
    pub fn new() -> Self {
        Self
    }

    fn checksum(iban: &str) -> u32 {
        let (head, tail) = iban.split_at(4);
        tail.chars().chain(head.chars()).fold(0, |acc, c| {
            // Letters expand to two digits (A = 10 ... Z = 35)
            let value = c.to_digit(36).unwrap_or(0);
            if value >= 10 {
                (acc * 100 + value) % 97
            } else {
                (acc * 10 + value) % 97
            }
        })
    }
}

impl FieldValidator<str> for IbanValidator {
    fn validate(&self, value: &str) -> Result<(), Rejection> {
        let iban: String =
            value.chars().filter(|c| !c.is_whitespace()).map(|c| c.to_ascii_uppercase()).collect();

        if !(IBAN_MIN_LENGTH..=IBAN_MAX_LENGTH).contains(&iban.len()) {
            return Err(Rejection::new("invalid_iban", "Invalid IBAN length"));
        }

        let bytes = iban.as_bytes();
        if !bytes[..2].iter().all(u8::is_ascii_uppercase)
            || !bytes[2..4].iter().all(u8::is_ascii_digit)
            || !bytes.iter().all(u8::is_ascii_alphanumeric)
        {
            return Err(Rejection::new("invalid_iban", "Invalid IBAN format"));
        }

        if Self::checksum(&iban) != 1 {
            return Err(Rejection::new("invalid_iban", "Invalid IBAN checksum"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_validator_between() {
        let validator = RangeValidator::new(0_i16, 100);

        assert!(validator.validate(&0).is_ok());
        assert!(validator.validate(&100).is_ok());
        assert_eq!(validator.validate(&-1).unwrap_err().code, "too_low");
        assert_eq!(validator.validate(&101).unwrap_err().code, "too_high");
    }

    #[test]
    fn test_string_validator_counts_characters() {
        let validator = StringValidator::new().min_length(3).max_length(5);

        // 3 characters, 4 bytes
        assert!(validator.validate("Zoë").is_ok());
        assert_eq!(validator.validate("Éléonore").unwrap_err().code, "too_long");
        assert_eq!(validator.validate("Al").unwrap_err().code, "too_short");
    }

    #[test]
    fn test_string_validator_trims_unless_told_not_to() {
        let trimmed = StringValidator::new().min_length(6);
        let raw = StringValidator::new().min_length(6).trim(false);

        assert!(trimmed.validate("  abc  ").is_err());
        assert!(raw.validate("  abc  ").is_ok());
    }

    #[test]
    fn test_email_validator() {
        let validator = EmailValidator::new();

        assert!(validator.validate("jane@example.com").is_ok());
        assert!(validator.validate("jane.doe+tag@mail.example.fr").is_ok());
        assert!(validator.validate("@example.com").is_err());
        assert_eq!(
            validator.validate("not-an-email"),
            Err(Rejection::new("invalid_email", "Invalid email format"))
        );
    }

    #[test]
    fn test_iban_validator_accepts_valid_numbers() {
        let validator = IbanValidator::new();

        assert!(validator.validate("FR1420041010050500013M02606").is_ok());
        assert!(validator.validate("GB82 WEST 1234 5698 7654 32").is_ok());
        assert!(validator.validate("de89370400440532013000").is_ok());
    }

    #[test]
    fn test_iban_validator_rejects_bad_checksum() {
        let validator = IbanValidator::new();

        assert_eq!(
            validator.validate("FR1420041010050500013M02607"),
            Err(Rejection::new("invalid_iban", "Invalid IBAN checksum"))
        );
    }

    #[test]
    fn test_iban_validator_rejects_bad_shape() {
        let validator = IbanValidator::new();

        assert!(validator.validate("FR14").is_err());
        assert!(validator.validate("1234567890123456").is_err());
        assert!(validator.validate("FR14-2004-1010-0505-0001").is_err());
    }
}
