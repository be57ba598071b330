//! # Lodgely Core
//!
//! Business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for profile persistence
//! - Scenario-grouped profile validation rules
//! - The profile use cases
//!
//! ## Architecture Principles
//! - Only depends on `lodgely-common` and `lodgely-domain`
//! - No database or platform code
//! - All external dependencies via traits

pub mod user;

pub use user::ports::ProfileRepository;
pub use user::service::ProfileService;
pub use user::validation::ProfileValidator;
