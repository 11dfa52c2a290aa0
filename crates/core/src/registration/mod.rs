//! Registration use-case: validate, stamp, provision, append

pub mod ports;
pub mod service;
pub mod validation;

pub use ports::Clock;
pub use service::{RegistrationReceipt, RegistrationService};
pub use validation::{validate, ValidatedRegistration};
