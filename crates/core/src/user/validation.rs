//! Profile validation rules
//!
//! Rules are grouped by [`ValidationScenario`]. A form validates the
//! scenario it edits plus [`ValidationScenario::Default`], whose column
//! limits and ranges apply everywhere.

use lodgely_common::validation::{
    EmailValidator, FieldError, IbanValidator, RangeValidator, StringValidator, Validator,
};
use lodgely_domain::constants::{
    MAX_BANK_OWNER_ADDRESS_LENGTH, MAX_BANK_OWNER_NAME_LENGTH, MAX_BIC_LENGTH,
    MAX_COUNTRY_CODE_LENGTH, MAX_EMAIL_LENGTH, MAX_IBAN_LENGTH, MAX_MOTHER_TONGUE_LENGTH,
    MAX_NAME_LENGTH, MAX_PERCENT, MAX_PHONE_LENGTH, MAX_PHONE_PREFIX_LENGTH,
    MAX_PROFESSION_LENGTH, MIN_EMAIL_LENGTH, MIN_NAME_LENGTH, MIN_PASSWORD_LENGTH, MIN_PERCENT,
};
use lodgely_domain::{LodgelyError, Profile, Result, ValidationScenario, Violation};

/// Applies scenario-grouped field rules to a [`Profile`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileValidator;

impl ProfileValidator {
    pub fn new() -> Self {
        Self
    }

    /// Run the rules of every given scenario and collect the violations
    ///
    /// Each violation is tagged with the scenario whose rule failed. A field
    /// checked by two scenarios may be reported twice.
    pub fn validate(&self, profile: &Profile, scenarios: &[ValidationScenario]) -> Vec<Violation> {
        scenarios.iter().flat_map(|&scenario| self.validate_scenario(profile, scenario)).collect()
    }

    /// Like [`validate`](Self::validate) but fails with
    /// `LodgelyError::Validation` when anything is reported
    pub fn check(&self, profile: &Profile, scenarios: &[ValidationScenario]) -> Result<()> {
        let violations = self.validate(profile, scenarios);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(LodgelyError::Validation(violations))
        }
    }

    fn validate_scenario(&self, profile: &Profile, scenario: ValidationScenario) -> Vec<Violation> {
        let mut v = Validator::for_scenario(scenario.to_string());

        match scenario {
            ValidationScenario::Registration => {
                email_rules(&mut v, profile);
                name_rules(&mut v, profile);
                v.validate_required("birthday", profile.birthday().as_ref());
                v.validate_not_empty(
                    "country_of_residence",
                    profile.country_of_residence().unwrap_or_default(),
                );
            }
            ValidationScenario::Profile => {
                email_rules(&mut v, profile);
                name_rules(&mut v, profile);
                v.validate_not_empty("mother_tongue", profile.mother_tongue().unwrap_or_default());
            }
            ValidationScenario::ProfilePayment => {
                name_rules(&mut v, profile);
                v.validate_required("birthday", profile.birthday().as_ref());
                v.validate_not_empty(
                    "country_of_residence",
                    profile.country_of_residence().unwrap_or_default(),
                );
                payment_rules(&mut v, profile);
            }
            ValidationScenario::ProfileContact => email_rules(&mut v, profile),
            ValidationScenario::Default => default_rules(&mut v, profile),
        }

        v.into_errors().into_iter().map(|error| to_violation(error, scenario)).collect()
    }
}

fn email_rules(v: &mut Validator, profile: &Profile) {
    let email = profile.email();
    v.validate_not_empty("email", email);
    if !email.trim().is_empty() {
        let length =
            StringValidator::new().min_length(MIN_EMAIL_LENGTH).max_length(MAX_EMAIL_LENGTH);
        v.validate_field("email", email, &length);
        v.validate_field("email", email, &EmailValidator::new());
    }
}

fn name_rules(v: &mut Validator, profile: &Profile) {
    let length = StringValidator::new().min_length(MIN_NAME_LENGTH).max_length(MAX_NAME_LENGTH);
    for (field, value) in [("first_name", profile.first_name()), ("last_name", profile.last_name())] {
        v.validate_not_empty(field, value);
        if !value.trim().is_empty() {
            v.validate_field(field, value, &length);
        }
    }
}

fn payment_rules(v: &mut Validator, profile: &Profile) {
    let iban = profile.iban().unwrap_or_default();
    v.validate_not_empty("iban", iban);
    if !iban.trim().is_empty() {
        v.validate_field("iban", iban, &IbanValidator::new());
    }

    v.validate_not_empty("bic", profile.bic().unwrap_or_default());
    v.validate_not_empty("bank_owner_name", profile.bank_owner_name().unwrap_or_default());
    v.validate_not_empty("bank_owner_address", profile.bank_owner_address().unwrap_or_default());
}

fn default_rules(v: &mut Validator, profile: &Profile) {
    let password = StringValidator::new().min_length(MIN_PASSWORD_LENGTH).trim(false);
    v.validate_optional("plain_password", profile.plain_password(), &password);

    let column_limits = [
        ("phone", profile.phone(), MAX_PHONE_LENGTH),
        ("phone_prefix", profile.phone_prefix(), MAX_PHONE_PREFIX_LENGTH),
        ("nationality", profile.nationality(), MAX_COUNTRY_CODE_LENGTH),
        ("country_of_residence", profile.country_of_residence(), MAX_COUNTRY_CODE_LENGTH),
        ("profession", profile.profession(), MAX_PROFESSION_LENGTH),
        ("iban", profile.iban(), MAX_IBAN_LENGTH),
        ("bic", profile.bic(), MAX_BIC_LENGTH),
        ("bank_owner_name", profile.bank_owner_name(), MAX_BANK_OWNER_NAME_LENGTH),
        ("bank_owner_address", profile.bank_owner_address(), MAX_BANK_OWNER_ADDRESS_LENGTH),
        ("mother_tongue", profile.mother_tongue(), MAX_MOTHER_TONGUE_LENGTH),
    ];
    for (field, value, max) in column_limits {
        v.validate_optional(field, value, &StringValidator::new().max_length(max).trim(false));
    }

    let percent = RangeValidator::new(MIN_PERCENT, MAX_PERCENT);
    let bounded = [
        ("fee_as_asker", profile.fee_as_asker()),
        ("fee_as_offerer", profile.fee_as_offerer()),
        ("average_asker_rating", profile.average_asker_rating()),
        ("average_offerer_rating", profile.average_offerer_rating()),
    ];
    for (field, value) in bounded {
        v.validate_optional(field, value.as_ref(), &percent);
    }
}

fn to_violation(error: FieldError, scenario: ValidationScenario) -> Violation {
    Violation::new(error.field, error.message, scenario).with_code(error.code)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn registrable() -> Profile {
        let mut profile = Profile::new();
        profile
            .set_email(Some("jane.doe@example.com"))
            .set_first_name("Jane")
            .set_last_name("Doe")
            .set_birthday(NaiveDate::from_ymd_opt(1990, 4, 12));
        profile
    }

    fn fields(violations: &[Violation]) -> Vec<&str> {
        violations.iter().map(|v| v.field.as_str()).collect()
    }

    #[test]
    fn valid_registration_has_no_violations() {
        let scenarios = [ValidationScenario::Registration, ValidationScenario::Default];
        let violations = ProfileValidator::new().validate(&registrable(), &scenarios);
        assert!(violations.is_empty(), "{violations:?}");
    }

    #[test]
    fn blank_email_reports_blank_only() {
        let mut profile = registrable();
        profile.set_email(None);

        let violations =
            ProfileValidator::new().validate(&profile, &[ValidationScenario::ProfileContact]);
        assert_eq!(fields(&violations), ["email"]);
        assert_eq!(violations[0].code.as_deref(), Some("blank"));
        assert_eq!(violations[0].scenario, ValidationScenario::ProfileContact);
    }

    #[test]
    fn short_names_are_rejected() {
        let mut profile = registrable();
        profile.set_first_name("Al").set_last_name("");

        let violations =
            ProfileValidator::new().validate(&profile, &[ValidationScenario::Registration]);
        assert_eq!(fields(&violations), ["first_name", "last_name"]);
    }

    #[test]
    fn mother_tongue_only_checked_in_profile_scenario() {
        let profile = registrable();
        let validator = ProfileValidator::new();

        assert!(validator.validate(&profile, &[ValidationScenario::Registration]).is_empty());
        assert_eq!(
            fields(&validator.validate(&profile, &[ValidationScenario::Profile])),
            ["mother_tongue"]
        );
    }

    #[test]
    fn payment_scenario_checks_bank_details() {
        let mut profile = registrable();
        profile.set_iban(Some("FR1420041010050500013M02607".to_string()));

        let violations =
            ProfileValidator::new().validate(&profile, &[ValidationScenario::ProfilePayment]);
        assert_eq!(fields(&violations), ["iban", "bic", "bank_owner_name", "bank_owner_address"]);
        assert_eq!(violations[0].message, "Invalid IBAN checksum");
        assert_eq!(violations[0].code.as_deref(), Some("invalid_iban"));
        assert!(violations[1..].iter().all(|v| v.code.as_deref() == Some("blank")));
    }

    #[test]
    fn default_scenario_bounds_percentages_and_columns() {
        let mut profile = registrable();
        profile
            .set_fee_as_asker(Some(101))
            .set_average_offerer_rating(Some(-1))
            .set_mother_tongue(Some("en-GB-x".to_string()))
            .set_plain_password(Some("12345".to_string()));

        let violations = ProfileValidator::new().validate(&profile, &[ValidationScenario::Default]);
        assert_eq!(
            fields(&violations),
            ["plain_password", "mother_tongue", "fee_as_asker", "average_offerer_rating"]
        );
        let codes: Vec<_> = violations.iter().filter_map(|v| v.code.as_deref()).collect();
        assert_eq!(codes, ["too_short", "too_long", "too_high", "too_low"]);
    }

    #[test]
    fn check_wraps_violations_in_error() {
        let err = ProfileValidator::new()
            .check(&Profile::new(), &[ValidationScenario::Registration])
            .unwrap_err();

        assert!(matches!(err, LodgelyError::Validation(_)));
        assert_eq!(fields(err.violations()), ["email", "first_name", "last_name", "birthday"]);
    }
}
