//! Spreadsheet structure as seen by the registration service

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TABLE_NAME, DEFAULT_TEMPLATE_TAB};

/// A tab (sheet) inside the spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: i64,
    pub title: String,
}

/// A named range ("table") and the tab it points into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRange {
    pub id: String,
    pub name: String,
    /// Tab the range points into. Ranges without an explicit tab live on
    /// the first tab, id 0.
    pub tab_id: i64,
}

/// One read of the spreadsheet's title, tabs and named ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadsheetMetadata {
    pub title: String,
    pub tabs: Vec<TabInfo>,
    pub named_ranges: Vec<NamedRange>,
}

impl SpreadsheetMetadata {
    /// Find a tab by exact title.
    #[must_use]
    pub fn find_tab(&self, title: &str) -> Option<&TabInfo> {
        self.tabs.iter().find(|tab| tab.title == title)
    }

    #[must_use]
    pub fn has_tab(&self, title: &str) -> bool {
        self.find_tab(title).is_some()
    }

    /// Named ranges anchored on the given tab.
    pub fn named_ranges_on(&self, tab_id: i64) -> impl Iterator<Item = &NamedRange> {
        self.named_ranges.iter().filter(move |range| range.tab_id == tab_id)
    }
}

/// How a missing tab gets created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TabPolicy {
    /// Add an empty tab with the requested name.
    #[default]
    CreateBlank,
    /// Copy `template_name`, then rename the copy's named ranges to
    /// `rename_to` so consumers find a stable table name.
    DuplicateTemplate { template_name: String, rename_to: String },
}

impl TabPolicy {
    /// Duplicate the `"default"` tab and rename its table to `"Attendees"`.
    #[must_use]
    pub fn duplicate_default_template() -> Self {
        Self::DuplicateTemplate {
            template_name: DEFAULT_TEMPLATE_TAB.to_string(),
            rename_to: DEFAULT_TABLE_NAME.to_string(),
        }
    }
}
