//! Google Sheets implementation of the spreadsheet gateway

use std::sync::Arc;

use async_trait::async_trait;
use eventreg_core::SpreadsheetGateway;
use eventreg_domain::{EventRegError, Result, SheetRow, SheetsConfig, SpreadsheetMetadata};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::auth::{AccessTokenProvider, ServiceAccountTokenProvider};
use super::types::{
    tab_anchor_range, BatchUpdateRequest, BatchUpdateResponse, Request, Spreadsheet, ValueRange,
    METADATA_FIELDS,
};
use crate::http::HttpClient;

const USER_AGENT: &str = concat!("eventreg/", env!("CARGO_PKG_VERSION"));

/// REST client for one spreadsheet, authenticated as a service account.
pub struct GoogleSheetsClient {
    http: HttpClient,
    tokens: Arc<dyn AccessTokenProvider>,
    api_base: String,
    spreadsheet_id: String,
}

impl GoogleSheetsClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    /// `EventRegError::Config` when the private key cannot be parsed.
    pub fn new(config: &SheetsConfig) -> Result<Self> {
        let http = HttpClient::builder().user_agent(USER_AGENT).build()?;
        let tokens = Arc::new(ServiceAccountTokenProvider::new(config, http.clone())?);
        Ok(Self::with_token_provider(http, tokens, &config.api_base, &config.spreadsheet_id))
    }

    /// Build a client around an existing token source.
    pub fn with_token_provider(
        http: HttpClient,
        tokens: Arc<dyn AccessTokenProvider>,
        api_base: &str,
        spreadsheet_id: &str,
    ) -> Self {
        Self {
            http,
            tokens,
            api_base: api_base.trim_end_matches('/').to_string(),
            spreadsheet_id: spreadsheet_id.to_string(),
        }
    }

    fn spreadsheet_url(&self) -> String {
        format!("{}/spreadsheets/{}", self.api_base, self.spreadsheet_id)
    }

    async fn authorized(&self, method: Method, url: &str) -> Result<RequestBuilder> {
        let token = self.tokens.access_token().await?;
        Ok(self.http.request(method, url).bearer_auth(token))
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        self.http.send_checked(request).await
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T> {
        response.json().await.map_err(|e| {
            EventRegError::InvalidInput(format!("Failed to parse Google Sheets response: {e}"))
        })
    }

    async fn batch_update(&self, requests: Vec<Request>) -> Result<BatchUpdateResponse> {
        let url = format!("{}:batchUpdate", self.spreadsheet_url());
        let request =
            self.authorized(Method::POST, &url).await?.json(&BatchUpdateRequest { requests });
        Self::parse(self.execute(request).await?).await
    }
}

#[async_trait]
impl SpreadsheetGateway for GoogleSheetsClient {
    async fn fetch_metadata(&self) -> Result<SpreadsheetMetadata> {
        let request = self
            .authorized(Method::GET, &self.spreadsheet_url())
            .await?
            .query(&[("fields", METADATA_FIELDS)]);
        let spreadsheet: Spreadsheet = Self::parse(self.execute(request).await?).await?;

        let metadata = SpreadsheetMetadata::from(spreadsheet);
        debug!(
            tabs = metadata.tabs.len(),
            named_ranges = metadata.named_ranges.len(),
            "fetched spreadsheet metadata"
        );
        Ok(metadata)
    }

    async fn add_tab(&self, title: &str) -> Result<i64> {
        let response = self.batch_update(vec![Request::add_sheet(title)]).await?;
        let tab_id = response
            .replies
            .into_iter()
            .next()
            .and_then(|reply| reply.add_sheet)
            .map(|reply| reply.properties.sheet_id)
            .ok_or_else(|| EventRegError::InvalidInput("addSheet reply missing sheet id".into()))?;

        info!(tab = title, tab_id, "added sheet");
        Ok(tab_id)
    }

    async fn duplicate_tab(&self, source_tab_id: i64, new_title: &str) -> Result<i64> {
        let response =
            self.batch_update(vec![Request::duplicate_sheet(source_tab_id, new_title)]).await?;
        let tab_id = response
            .replies
            .into_iter()
            .next()
            .and_then(|reply| reply.duplicate_sheet)
            .map(|reply| reply.properties.sheet_id)
            .ok_or_else(|| {
                EventRegError::InvalidInput("duplicateSheet reply missing sheet id".into())
            })?;

        info!(tab = new_title, tab_id, source_tab_id, "duplicated sheet");
        Ok(tab_id)
    }

    async fn rename_named_ranges(&self, range_ids: &[String], new_name: &str) -> Result<()> {
        if range_ids.is_empty() {
            return Ok(());
        }
        let requests =
            range_ids.iter().map(|id| Request::rename_named_range(id, new_name)).collect();
        self.batch_update(requests).await?;
        Ok(())
    }

    async fn append_row(&self, tab: &str, row: &SheetRow) -> Result<()> {
        let range = tab_anchor_range(tab);
        let url = format!(
            "{}/values/{}:append",
            self.spreadsheet_url(),
            urlencoding::encode(&range)
        );
        let request = self
            .authorized(Method::POST, &url)
            .await?
            .query(&[("valueInputOption", "USER_ENTERED")])
            .json(&ValueRange { values: [row.cells()] });

        self.execute(request).await?;
        Ok(())
    }
}
