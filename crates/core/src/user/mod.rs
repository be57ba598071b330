//! Marketplace member profiles: persistence port, validation rules and
//! use cases

pub mod ports;
pub mod service;
pub mod validation;

pub use ports::ProfileRepository;
pub use service::ProfileService;
pub use validation::ProfileValidator;
