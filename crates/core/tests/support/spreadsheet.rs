//! In-memory `SpreadsheetGateway` with failure injection.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use eventreg_core::SpreadsheetGateway;
use eventreg_domain::{
    EventRegError, NamedRange, Result, SheetRow, SpreadsheetMetadata, TabInfo,
};

/// Gateway operations, used for call counting and failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FetchMetadata,
    AddTab,
    DuplicateTab,
    RenameNamedRanges,
    AppendRow,
}

#[derive(Default)]
struct State {
    metadata: SpreadsheetMetadata,
    rows: HashMap<String, Vec<SheetRow>>,
    next_tab_id: i64,
    next_range_id: u32,
    failing: HashSet<Operation>,
    calls: HashMap<Operation, usize>,
    yield_on_fetch: bool,
}

/// Spreadsheet kept in memory. Mirrors the remote service closely enough:
/// tab titles are unique, appends need an existing tab and duplicating a
/// tab copies its named ranges under generated names.
#[derive(Default)]
pub struct InMemorySpreadsheet {
    state: Mutex<State>,
}

impl InMemorySpreadsheet {
    pub fn new(title: &str) -> Self {
        let sheet = Self::default();
        sheet.state.lock().unwrap().metadata.title = title.to_string();
        sheet
    }

    /// Add a tab up front; returns `self` for chaining.
    pub fn with_tab(self, title: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let id = state.allocate_tab_id();
            state.metadata.tabs.push(TabInfo { id, title: title.to_string() });
        }
        self
    }

    /// Anchor a named range on an existing tab.
    pub fn with_named_range(self, name: &str, tab_title: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let tab_id = state.metadata.find_tab(tab_title).map_or(0, |tab| tab.id);
            let id = state.allocate_range_id();
            state.metadata.named_ranges.push(NamedRange { id, name: name.to_string(), tab_id });
        }
        self
    }

    /// Make every call to `operation` fail with a network error.
    pub fn fail_on(self, operation: Operation) -> Self {
        self.state.lock().unwrap().failing.insert(operation);
        self
    }

    /// Yield to the scheduler after reading metadata, widening the
    /// check-then-create window.
    pub fn yield_on_fetch(self) -> Self {
        self.state.lock().unwrap().yield_on_fetch = true;
        self
    }

    pub fn tab_titles(&self) -> Vec<String> {
        self.state.lock().unwrap().metadata.tabs.iter().map(|tab| tab.title.clone()).collect()
    }

    pub fn rows(&self, tab: &str) -> Vec<SheetRow> {
        self.state.lock().unwrap().rows.get(tab).cloned().unwrap_or_default()
    }

    pub fn named_ranges(&self) -> Vec<NamedRange> {
        self.state.lock().unwrap().metadata.named_ranges.clone()
    }

    pub fn tab_id(&self, title: &str) -> Option<i64> {
        self.state.lock().unwrap().metadata.find_tab(title).map(|tab| tab.id)
    }

    pub fn calls(&self, operation: Operation) -> usize {
        self.state.lock().unwrap().calls.get(&operation).copied().unwrap_or(0)
    }

    fn begin(&self, operation: Operation) -> Result<std::sync::MutexGuard<'_, State>> {
        let mut state = self.state.lock().unwrap();
        *state.calls.entry(operation).or_default() += 1;
        if state.failing.contains(&operation) {
            return Err(EventRegError::Network(format!("injected failure: {operation:?}")));
        }
        Ok(state)
    }
}

impl State {
    fn allocate_tab_id(&mut self) -> i64 {
        let id = self.next_tab_id;
        self.next_tab_id += 1;
        id
    }

    fn allocate_range_id(&mut self) -> String {
        self.next_range_id += 1;
        format!("range-{}", self.next_range_id)
    }

    fn insert_tab(&mut self, title: &str) -> Result<i64> {
        if self.metadata.has_tab(title) {
            return Err(EventRegError::InvalidInput(format!(
                "A sheet with the name \"{title}\" already exists"
            )));
        }
        let id = self.allocate_tab_id();
        self.metadata.tabs.push(TabInfo { id, title: title.to_string() });
        Ok(id)
    }
}

#[async_trait]
impl SpreadsheetGateway for InMemorySpreadsheet {
    async fn fetch_metadata(&self) -> Result<SpreadsheetMetadata> {
        let (snapshot, should_yield) = {
            let state = self.begin(Operation::FetchMetadata)?;
            (state.metadata.clone(), state.yield_on_fetch)
        };
        if should_yield {
            tokio::task::yield_now().await;
        }
        Ok(snapshot)
    }

    async fn add_tab(&self, title: &str) -> Result<i64> {
        self.begin(Operation::AddTab)?.insert_tab(title)
    }

    async fn duplicate_tab(&self, source_tab_id: i64, new_title: &str) -> Result<i64> {
        let mut state = self.begin(Operation::DuplicateTab)?;
        if !state.metadata.tabs.iter().any(|tab| tab.id == source_tab_id) {
            return Err(EventRegError::InvalidInput(format!("no sheet with id {source_tab_id}")));
        }
        let id = state.insert_tab(new_title)?;

        let copies: Vec<String> = state
            .metadata
            .named_ranges_on(source_tab_id)
            .map(|range| format!("{}_{id}", range.name))
            .collect();
        for name in copies {
            let range_id = state.allocate_range_id();
            state.metadata.named_ranges.push(NamedRange { id: range_id, name, tab_id: id });
        }
        Ok(id)
    }

    async fn rename_named_ranges(&self, range_ids: &[String], new_name: &str) -> Result<()> {
        let mut state = self.begin(Operation::RenameNamedRanges)?;
        for range in &mut state.metadata.named_ranges {
            if range_ids.contains(&range.id) {
                range.name = new_name.to_string();
            }
        }
        Ok(())
    }

    async fn append_row(&self, tab: &str, row: &SheetRow) -> Result<()> {
        let mut state = self.begin(Operation::AppendRow)?;
        if !state.metadata.has_tab(tab) {
            return Err(EventRegError::InvalidInput(format!("Unable to parse range: {tab}!A1")));
        }
        state.rows.entry(tab.to_string()).or_default().push(row.clone());
        Ok(())
    }
}
