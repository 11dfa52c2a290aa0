//! Port interfaces for the remote spreadsheet
//!
//! These traits define the boundary between the registration services and
//! the spreadsheet backend implementation.

use async_trait::async_trait;
use eventreg_domain::{Result, SheetRow, SpreadsheetMetadata};

/// Read, append and structural operations against one spreadsheet.
///
/// Implementations talk to the remote service; none of the calls are
/// retried and none are atomic with respect to each other.
#[async_trait]
pub trait SpreadsheetGateway: Send + Sync {
    /// Read the title, tabs and named ranges.
    async fn fetch_metadata(&self) -> Result<SpreadsheetMetadata>;

    /// Add an empty tab and return its id.
    async fn add_tab(&self, title: &str) -> Result<i64>;

    /// Copy an existing tab under a new title and return the copy's id.
    async fn duplicate_tab(&self, source_tab_id: i64, new_title: &str) -> Result<i64>;

    /// Give every listed named range the same new name.
    async fn rename_named_ranges(&self, range_ids: &[String], new_name: &str) -> Result<()>;

    /// Append one row beneath the existing content of `tab`, with values
    /// interpreted as if typed by a user.
    async fn append_row(&self, tab: &str, row: &SheetRow) -> Result<()>;
}
