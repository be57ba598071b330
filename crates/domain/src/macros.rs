//! Macro for implementing Display and FromStr for domain enums
//!
//! This macro eliminates boilerplate for enum conversions by providing a
//! single implementation for both Display and FromStr traits. It handles
//! case-insensitive parsing and consistent string representation.
//!
//! # Example
//!
//! ```rust
//! use lodgely_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum BookingStatus {
//!     New,
//!     Accepted,
//!     Refused,
//! }
//!
//! impl_domain_status_conversions!(BookingStatus {
//!     New => "new",
//!     Accepted => "accepted",
//!     Refused => "refused",
//! });
//! ```

/// Implements Display and FromStr traits for domain enums
///
/// This macro generates:
/// - Display trait: converts enum variants to lowercase strings
/// - FromStr trait: parses case-insensitive strings to enum variants
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their string
///   representations
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestStatus {
        Pending,
        Confirmed,
    }

    impl_domain_status_conversions!(TestStatus {
        Pending => "pending",
        Confirmed => "confirmed",
    });

    #[test]
    fn test_display_conversion() {
        assert_eq!(TestStatus::Pending.to_string(), "pending");
        assert_eq!(TestStatus::Confirmed.to_string(), "confirmed");
    }

    #[test]
    fn test_fromstr_is_case_insensitive() {
        assert_eq!(TestStatus::from_str("PENDING").unwrap(), TestStatus::Pending);
        assert_eq!(TestStatus::from_str("Confirmed").unwrap(), TestStatus::Confirmed);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestStatus::from_str("archived");
        assert!(result.unwrap_err().contains("Invalid TestStatus: archived"));
    }
}
