//! Spreadsheet title lookup

use std::sync::Arc;

use eventreg_domain::constants::FALLBACK_TITLE;
use eventreg_domain::Result;

use super::ports::SpreadsheetGateway;

/// Reads the spreadsheet's display title.
#[derive(Clone)]
pub struct TitleService {
    gateway: Arc<dyn SpreadsheetGateway>,
}

impl TitleService {
    pub fn new(gateway: Arc<dyn SpreadsheetGateway>) -> Self {
        Self { gateway }
    }

    /// Current title, or [`FALLBACK_TITLE`] when the spreadsheet has none.
    ///
    /// Remote failures propagate; the caller decides on the fallback.
    pub async fn get_title(&self) -> Result<String> {
        let metadata = self.gateway.fetch_metadata().await?;
        if metadata.title.trim().is_empty() {
            return Ok(FALLBACK_TITLE.to_string());
        }
        Ok(metadata.title)
    }
}
