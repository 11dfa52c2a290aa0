//! Presence checks for registration submissions
//!
//! Only presence is checked: a required field must be a string that is not
//! blank after trimming. Values are kept exactly as submitted.

use eventreg_domain::constants::{
    DATE_REQUIRED, FIRST_NAME_REQUIRED, LAST_NAME_REQUIRED, TIMESTAMP_REQUIRED,
};
use eventreg_domain::{EventRegError, RegistrationSubmission, Result, RowStamp, RowStamping};

/// A submission that passed the presence checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub heard_from: String,
    /// Present only for client-stamped deployments.
    pub client_stamp: Option<RowStamp>,
}

/// Check required fields in order: first name, last name, then (client
/// stamping only) timestamp and date. The first failure wins.
///
/// # Errors
/// `EventRegError::Validation` carrying the user-facing message.
pub fn validate(
    submission: RegistrationSubmission,
    stamping: RowStamping,
) -> Result<ValidatedRegistration> {
    let RegistrationSubmission { first_name, last_name, email, phone, heard_from, timestamp, today } =
        submission;

    let first_name = required(first_name, FIRST_NAME_REQUIRED)?;
    let last_name = required(last_name, LAST_NAME_REQUIRED)?;

    let client_stamp = match stamping {
        RowStamping::Server => None,
        RowStamping::Client => Some(RowStamp {
            timestamp: required(timestamp, TIMESTAMP_REQUIRED)?,
            tab_name: required(today, DATE_REQUIRED)?,
        }),
    };

    Ok(ValidatedRegistration {
        first_name,
        last_name,
        email: email.unwrap_or_default(),
        phone: phone.unwrap_or_default(),
        heard_from: heard_from.unwrap_or_default(),
        client_stamp,
    })
}

fn required(value: Option<String>, message: &str) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(EventRegError::Validation(message.to_string())),
    }
}
