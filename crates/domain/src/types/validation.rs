//! Validation scenarios and reported violations
//!
//! The profile model applies no rules itself. Rules are grouped by the form
//! context a profile is edited in; validators report failures as
//! [`Violation`]s tagged with the scenario that produced them.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_status_conversions;

/// Named validation context selecting which field rules apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ValidationScenario {
    /// Sign-up form
    Registration,
    /// Public profile edition
    Profile,
    /// Payment details (bank account, identity)
    ProfilePayment,
    /// Contact details (email, phone)
    ProfileContact,
    /// Rules that apply whatever the form
    Default,
}

impl_domain_status_conversions!(ValidationScenario {
    Registration => "registration",
    Profile => "profile",
    ProfilePayment => "profile_payment",
    ProfileContact => "profile_contact",
    Default => "default",
});

impl ValidationScenario {
    /// Every scenario, in declaration order
    pub const ALL: [Self; 5] = [
        Self::Registration,
        Self::Profile,
        Self::ProfilePayment,
        Self::ProfileContact,
        Self::Default,
    ];
}

/// One failed rule: which field, why, and under which scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Violation {
    pub field: String,
    pub message: String,
    pub scenario: ValidationScenario,
    /// Stable key of the failed rule for translation, e.g. `blank` or `too_long`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Violation {
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
        scenario: ValidationScenario,
    ) -> Self {
        Self { field: field.into(), message: message.into(), scenario, code: None }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn scenario_names_round_trip_through_strings() {
        for scenario in ValidationScenario::ALL {
            assert_eq!(ValidationScenario::from_str(&scenario.to_string()).unwrap(), scenario);
        }
        assert_eq!(ValidationScenario::ProfilePayment.to_string(), "profile_payment");
    }

    #[test]
    fn scenario_serde_matches_display() {
        let json = serde_json::to_string(&ValidationScenario::ProfileContact).unwrap();
        assert_eq!(json, "\"profile_contact\"");
    }
}
