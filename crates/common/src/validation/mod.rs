// Validation Module - field-level validation framework
mod validators;

pub use validators::{
    EmailValidator, FieldValidator, IbanValidator, RangeValidator, Rejection, StringValidator,
};

/// Individual field error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    /// Stable key of the failed rule (`blank`, `too_long`, ...)
    pub code: String,
    /// Scenario (rule group) that produced the error, if any
    pub scenario: Option<String>,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, rejection: Rejection) -> Self {
        Self {
            field: field.into(),
            message: rejection.message,
            code: rejection.code.to_string(),
            scenario: None,
        }
    }

    /// Tag the error with the scenario it was raised under
    pub fn with_scenario(mut self, scenario: impl Into<String>) -> Self {
        self.scenario = Some(scenario.into());
        self
    }
}

/// Collects field errors for one validation run
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
    scenario: Option<String>,
}

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator that stamps `scenario` on every error
    pub fn for_scenario(scenario: impl Into<String>) -> Self {
        Self { errors: Vec::new(), scenario: Some(scenario.into()) }
    }

    /// Record a rejected field
    pub fn reject(&mut self, field: impl Into<String>, rejection: Rejection) {
        let mut error = FieldError::new(field, rejection);
        if let Some(scenario) = &self.scenario {
            error = error.with_scenario(scenario.clone());
        }
        self.errors.push(error);
    }

    /// Validate a field with a specific validator
    pub fn validate_field<T, V>(&mut self, field: &str, value: &T, validator: &V)
    where
        T: ?Sized,
        V: FieldValidator<T> + ?Sized,
    {
        if let Err(rejection) = validator.validate(value) {
            self.reject(field, rejection);
        }
    }

    /// Validate a field only when it holds a value
    pub fn validate_optional<T, V>(&mut self, field: &str, value: Option<&T>, validator: &V)
    where
        T: ?Sized,
        V: FieldValidator<T> + ?Sized,
    {
        if let Some(value) = value {
            self.validate_field(field, value, validator);
        }
    }

    /// Validate string is not blank
    pub fn validate_not_empty(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.reject(field, Rejection::new("blank", "cannot be empty"));
        }
    }

    /// Validate a value is present
    pub fn validate_required<T>(&mut self, field: &str, value: Option<&T>) {
        if value.is_none() {
            self.reject(field, Rejection::new("required", "is required"));
        }
    }

    /// Check if validation has errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors collected so far
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Consume the validator and return every collected field error
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}
