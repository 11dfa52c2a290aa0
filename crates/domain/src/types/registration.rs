//! Registration types
//!
//! A submission lives for one request. It becomes a six-cell [`SheetRow`]
//! stamped with a timestamp and appended to the tab named by a [`RowStamp`].

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::constants::{SHEET_ROW_WIDTH, TAB_DATE_FORMAT, TIMESTAMP_FORMAT};
use crate::impl_config_choice_conversions;

/// Attendee details posted by the registration form.
///
/// Every field is optional at the wire level. A field whose JSON value is not
/// a string (number, array, `null`) is treated as absent, so presence checks
/// stay in the registration service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationSubmission {
    #[serde(default, deserialize_with = "string_or_absent")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    pub phone: Option<String>,
    /// Already joined by the form, e.g. `"Friend, Instagram"`.
    #[serde(default, deserialize_with = "string_or_absent")]
    pub heard_from: Option<String>,
    /// Caller-supplied display timestamp (client-stamped deployments only).
    #[serde(default, deserialize_with = "string_or_absent")]
    pub timestamp: Option<String>,
    /// Caller-supplied tab name (client-stamped deployments only).
    #[serde(default, deserialize_with = "string_or_absent")]
    pub today: Option<String>,
}

fn string_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// One spreadsheet row:
/// `[timestamp, firstName, lastName, email, phone, heardFrom]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRow([String; SHEET_ROW_WIDTH]);

impl SheetRow {
    /// Build a row in column order.
    #[must_use]
    pub fn new(
        timestamp: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        heard_from: impl Into<String>,
    ) -> Self {
        Self([
            timestamp.into(),
            first_name.into(),
            last_name.into(),
            email.into(),
            phone.into(),
            heard_from.into(),
        ])
    }

    #[must_use]
    pub fn cells(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn into_cells(self) -> Vec<String> {
        self.0.into()
    }

    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.0[0]
    }
}

/// Who stamps a registration with its timestamp and tab name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStamping {
    /// The server formats the current time and derives the day's tab.
    #[default]
    Server,
    /// The caller sends `timestamp` and `today`; both are required.
    Client,
}

impl_config_choice_conversions!(RowStamping {
    Server => "server",
    Client => "client",
});

/// Display timestamp plus the tab the row belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowStamp {
    pub timestamp: String,
    pub tab_name: String,
}

impl RowStamp {
    /// Stamp an instant as seen in `zone`.
    ///
    /// The timestamp uses the long British form
    /// (`16 October 2026 at 02:05 pm`); the tab name is the calendar date
    /// (`2026-10-16`) in the same zone.
    #[must_use]
    pub fn at(instant: DateTime<Utc>, zone: Tz) -> Self {
        let local = instant.with_timezone(&zone);
        Self {
            timestamp: local.format(TIMESTAMP_FORMAT).to_string(),
            tab_name: local.format(TAB_DATE_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn deserializes_camel_case_fields() {
        let submission: RegistrationSubmission = serde_json::from_str(
            r#"{"firstName":"Ada","lastName":"Lovelace","email":"ada@example.com","phone":"","heardFrom":"Friend"}"#,
        )
        .unwrap();

        assert_eq!(submission.first_name.as_deref(), Some("Ada"));
        assert_eq!(submission.last_name.as_deref(), Some("Lovelace"));
        assert_eq!(submission.email.as_deref(), Some("ada@example.com"));
        assert_eq!(submission.phone.as_deref(), Some(""));
        assert_eq!(submission.heard_from.as_deref(), Some("Friend"));
        assert_eq!(submission.timestamp, None);
        assert_eq!(submission.today, None);
    }

    #[test]
    fn non_string_values_are_treated_as_absent() {
        let submission: RegistrationSubmission = serde_json::from_str(
            r#"{"firstName":42,"lastName":null,"heardFrom":["Friend"],"today":true}"#,
        )
        .unwrap();

        assert_eq!(submission, RegistrationSubmission::default());
    }

    #[test]
    fn row_keeps_column_order() {
        let row = SheetRow::new("ts", "Ada", "Lovelace", "", "", "Friend");
        assert_eq!(row.cells(), ["ts", "Ada", "Lovelace", "", "", "Friend"]);
        assert_eq!(row.timestamp(), "ts");
        assert_eq!(row.into_cells().len(), SHEET_ROW_WIDTH);
    }

    #[test]
    fn row_serializes_as_flat_array() {
        let row = SheetRow::new("ts", "a", "b", "c", "d", "e");
        assert_eq!(serde_json::to_string(&row).unwrap(), r#"["ts","a","b","c","d","e"]"#);
    }

    #[test]
    fn stamp_formats_afternoon_in_utc() {
        let instant = Utc.with_ymd_and_hms(2026, 10, 16, 14, 5, 0).unwrap();
        let stamp = RowStamp::at(instant, chrono_tz::UTC);

        assert_eq!(stamp.timestamp, "16 October 2026 at 02:05 pm");
        assert_eq!(stamp.tab_name, "2026-10-16");
    }

    #[test]
    fn stamp_uses_zone_for_both_date_and_time() {
        // 23:30 UTC on the 16th is already the 17th in Sydney.
        let instant = Utc.with_ymd_and_hms(2026, 10, 16, 23, 30, 0).unwrap();
        let stamp = RowStamp::at(instant, chrono_tz::Australia::Sydney);

        assert_eq!(stamp.tab_name, "2026-10-17");
        assert_eq!(stamp.timestamp, "17 October 2026 at 10:30 am");
    }

    #[test]
    fn row_stamping_parses_keywords() {
        assert_eq!("server".parse::<RowStamping>().unwrap(), RowStamping::Server);
        assert_eq!("Client".parse::<RowStamping>().unwrap(), RowStamping::Client);
        assert!("both".parse::<RowStamping>().is_err());
        assert_eq!(RowStamping::default(), RowStamping::Server);
    }
}
