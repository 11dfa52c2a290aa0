//! Shared helpers for route tests: a recording spreadsheet and a router
//! factory.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use eventreg_api::{create_router, AppContext};
use eventreg_core::{Clock, SpreadsheetGateway};
use eventreg_domain::{
    Config, EventRegError, LoggingConfig, NamedRange, RegistrationConfig, Result, ServerConfig,
    SheetRow, SheetsConfig, SpreadsheetMetadata, TabInfo,
};
use tower::ServiceExt;

/// Spreadsheet fake that records appended rows per tab.
#[derive(Default)]
pub struct RecordingSpreadsheet {
    title: String,
    fail_reads: bool,
    tabs: Mutex<Vec<TabInfo>>,
    ranges: Mutex<Vec<NamedRange>>,
    rows: Mutex<Vec<(String, SheetRow)>>,
}

impl RecordingSpreadsheet {
    pub fn new(title: &str) -> Self {
        Self { title: title.to_string(), ..Self::default() }
    }

    /// Every metadata read fails with a network error.
    pub fn unreachable() -> Self {
        Self { fail_reads: true, ..Self::default() }
    }

    pub fn with_tab(self, title: &str) -> Self {
        {
            let mut tabs = self.tabs.lock().unwrap();
            let id = tabs.len() as i64;
            tabs.push(TabInfo { id, title: title.to_string() });
        }
        self
    }

    pub fn tab_titles(&self) -> Vec<String> {
        self.tabs.lock().unwrap().iter().map(|tab| tab.title.clone()).collect()
    }

    pub fn rows(&self) -> Vec<(String, SheetRow)> {
        self.rows.lock().unwrap().clone()
    }

    pub fn range_names(&self) -> Vec<String> {
        self.ranges.lock().unwrap().iter().map(|range| range.name.clone()).collect()
    }

    fn push_tab(&self, title: &str) -> i64 {
        let mut tabs = self.tabs.lock().unwrap();
        let id = tabs.len() as i64;
        tabs.push(TabInfo { id, title: title.to_string() });
        id
    }
}

#[async_trait]
impl SpreadsheetGateway for RecordingSpreadsheet {
    async fn fetch_metadata(&self) -> Result<SpreadsheetMetadata> {
        if self.fail_reads {
            return Err(EventRegError::Network("HTTP 503 Service Unavailable".into()));
        }
        Ok(SpreadsheetMetadata {
            title: self.title.clone(),
            tabs: self.tabs.lock().unwrap().clone(),
            named_ranges: self.ranges.lock().unwrap().clone(),
        })
    }

    async fn add_tab(&self, title: &str) -> Result<i64> {
        Ok(self.push_tab(title))
    }

    async fn duplicate_tab(&self, _source_tab_id: i64, new_title: &str) -> Result<i64> {
        let id = self.push_tab(new_title);
        self.ranges.lock().unwrap().push(NamedRange {
            id: format!("range-{id}"),
            name: format!("Table1_{id}"),
            tab_id: id,
        });
        Ok(id)
    }

    async fn rename_named_ranges(&self, range_ids: &[String], new_name: &str) -> Result<()> {
        for range in self.ranges.lock().unwrap().iter_mut() {
            if range_ids.contains(&range.id) {
                range.name = new_name.to_string();
            }
        }
        Ok(())
    }

    async fn append_row(&self, tab: &str, row: &SheetRow) -> Result<()> {
        self.rows.lock().unwrap().push((tab.to_string(), row.clone()));
        Ok(())
    }
}

/// Clock frozen at 16 October 2026, 14:05 UTC.
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 14, 5, 0).unwrap()
    }
}

pub fn test_config(registration: RegistrationConfig) -> Config {
    Config {
        sheets: SheetsConfig::new("sheet-123", "svc@example.iam.gserviceaccount.com", "unused"),
        server: ServerConfig::default(),
        registration,
        logging: LoggingConfig::default(),
    }
}

pub fn router(sheet: Arc<RecordingSpreadsheet>, registration: RegistrationConfig) -> Router {
    let context = AppContext::with_gateway(test_config(registration), sheet, Arc::new(FixedClock));
    create_router(Arc::new(context))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}
