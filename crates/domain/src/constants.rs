//! Application constants
//!
//! Centralized location for the domain-level constants: user-facing
//! messages, default names and Google endpoints.

// Display
pub const FALLBACK_TITLE: &str = "EventReg";

// Validation messages (returned to the caller verbatim)
pub const FIRST_NAME_REQUIRED: &str = "First Name is required";
pub const LAST_NAME_REQUIRED: &str = "Last Name is required";
pub const TIMESTAMP_REQUIRED: &str = "Timestamp is required";
pub const DATE_REQUIRED: &str = "Date is required";

// Generic failure shown for any non-validation registration error
pub const REGISTRATION_FAILED: &str = "Failed to register, please try again.";

// Tab provisioning
pub const DEFAULT_TEMPLATE_TAB: &str = "default";
pub const DEFAULT_TABLE_NAME: &str = "Attendees";

// Row layout
pub const SHEET_ROW_WIDTH: usize = 6;
pub const TIMESTAMP_FORMAT: &str = "%-d %B %Y at %I:%M %P";
pub const TAB_DATE_FORMAT: &str = "%Y-%m-%d";

// Server
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

// Google APIs
pub const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4";
pub const GOOGLE_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
