//! Tab provisioning: make sure a named tab exists before rows go into it

pub mod service;

pub use service::{ProvisionOutcome, TabProvisioner};
