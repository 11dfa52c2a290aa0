//! Google Sheets REST v4 wire types
//!
//! Only the fields the registration service reads or writes are modelled.

use eventreg_domain::{NamedRange, SpreadsheetMetadata, TabInfo};
use serde::{Deserialize, Serialize};

/// `fields` mask for the metadata read.
pub const METADATA_FIELDS: &str =
    "properties.title,sheets.properties(sheetId,title),namedRanges(namedRangeId,name,range.sheetId)";

// ============================================================================
// Spreadsheet metadata
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spreadsheet {
    #[serde(default)]
    pub properties: SpreadsheetProperties,
    #[serde(default)]
    pub sheets: Vec<Sheet>,
    #[serde(default)]
    pub named_ranges: Vec<ApiNamedRange>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SpreadsheetProperties {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Sheet {
    pub properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    /// Omitted by the API for the first sheet when its id is 0.
    #[serde(default)]
    pub sheet_id: i64,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiNamedRange {
    pub named_range_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub range: GridRange,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRange {
    /// Absent when the range points at the first sheet.
    #[serde(default)]
    pub sheet_id: Option<i64>,
}

impl From<Spreadsheet> for SpreadsheetMetadata {
    fn from(value: Spreadsheet) -> Self {
        Self {
            title: value.properties.title.unwrap_or_default(),
            tabs: value
                .sheets
                .into_iter()
                .map(|sheet| TabInfo { id: sheet.properties.sheet_id, title: sheet.properties.title })
                .collect(),
            named_ranges: value
                .named_ranges
                .into_iter()
                .map(|range| NamedRange {
                    id: range.named_range_id,
                    name: range.name,
                    // A missing sheet id means the first sheet, whose id is 0.
                    tab_id: range.range.sheet_id.unwrap_or(0),
                })
                .collect(),
        }
    }
}

// ============================================================================
// batchUpdate
// ============================================================================

#[derive(Debug, Serialize)]
pub struct BatchUpdateRequest {
    pub requests: Vec<Request>,
}

/// One entry of a `batchUpdate` call. Serialized as `{"<kind>": {...}}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    AddSheet(AddSheetRequest),
    DuplicateSheet(DuplicateSheetRequest),
    UpdateNamedRange(UpdateNamedRangeRequest),
}

#[derive(Debug, Serialize)]
pub struct AddSheetRequest {
    pub properties: NewSheetProperties,
}

#[derive(Debug, Serialize)]
pub struct NewSheetProperties {
    pub title: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateSheetRequest {
    pub source_sheet_id: i64,
    pub new_sheet_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNamedRangeRequest {
    pub named_range: NamedRangeUpdate,
    pub fields: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedRangeUpdate {
    pub named_range_id: String,
    pub name: String,
}

impl Request {
    pub fn add_sheet(title: &str) -> Self {
        Self::AddSheet(AddSheetRequest { properties: NewSheetProperties { title: title.to_string() } })
    }

    pub fn duplicate_sheet(source_sheet_id: i64, new_sheet_name: &str) -> Self {
        Self::DuplicateSheet(DuplicateSheetRequest {
            source_sheet_id,
            new_sheet_name: new_sheet_name.to_string(),
        })
    }

    /// Rename one named range; only the `name` field is touched.
    pub fn rename_named_range(named_range_id: &str, name: &str) -> Self {
        Self::UpdateNamedRange(UpdateNamedRangeRequest {
            named_range: NamedRangeUpdate {
                named_range_id: named_range_id.to_string(),
                name: name.to_string(),
            },
            fields: "name".to_string(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct BatchUpdateResponse {
    #[serde(default)]
    pub replies: Vec<Reply>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    #[serde(default)]
    pub add_sheet: Option<SheetReply>,
    #[serde(default)]
    pub duplicate_sheet: Option<SheetReply>,
}

#[derive(Debug, Deserialize)]
pub struct SheetReply {
    pub properties: SheetProperties,
}

// ============================================================================
// values.append
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ValueRange<'a> {
    pub values: [&'a [String]; 1],
}

/// A1 range addressing the top-left cell of `tab`.
///
/// The tab name is always quoted so dates and names with spaces parse; single
/// quotes inside the name are doubled.
pub fn tab_anchor_range(tab: &str) -> String {
    format!("'{}'!A1", tab.replace('\'', "''"))
}
