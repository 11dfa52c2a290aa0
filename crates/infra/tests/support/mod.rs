//! Shared helpers for `eventreg-infra` integration tests.

#![allow(dead_code)]

use eventreg_domain::SheetsConfig;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SPREADSHEET_ID: &str = "sheet-123";
pub const SERVICE_ACCOUNT_EMAIL: &str = "registrations@eventreg-test.iam.gserviceaccount.com";
pub const ACCESS_TOKEN: &str = "ya29.test-token";

/// PKCS#8 RSA key used only by these tests.
pub const PRIVATE_KEY_PEM: &str = include_str!("../fixtures/service_account_key.pem");
pub const PUBLIC_KEY_PEM: &str = include_str!("../fixtures/service_account_key.pub.pem");

/// Configuration pointing both the token endpoint and the Sheets API at the
/// mock server. The key is stored single-line with `\n` escapes, the way it
/// arrives from an environment variable.
pub fn sheets_config(server: &MockServer) -> SheetsConfig {
    let mut config = SheetsConfig::new(
        SPREADSHEET_ID,
        SERVICE_ACCOUNT_EMAIL,
        PRIVATE_KEY_PEM.replace('\n', "\\n"),
    );
    config.api_base = format!("{}/v4", server.uri());
    config.token_uri = format!("{}/token", server.uri());
    config
}

pub fn spreadsheet_path() -> String {
    format!("/v4/spreadsheets/{SPREADSHEET_ID}")
}

pub fn batch_update_path() -> String {
    format!("{}:batchUpdate", spreadsheet_path())
}

/// Token endpoint answering every JWT-bearer exchange with [`ACCESS_TOKEN`].
pub async fn mount_token_endpoint(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("grant_type=urn%3Aietf%3Aparams%3Aoauth%3Agrant-type%3Ajwt-bearer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": ACCESS_TOKEN,
            "expires_in": 3599,
            "token_type": "Bearer"
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Metadata body with the given title, tabs `(id, title)` and named ranges
/// `(id, name, sheet id)`.
pub fn metadata_body(
    title: &str,
    tabs: &[(i64, &str)],
    ranges: &[(&str, &str, i64)],
) -> serde_json::Value {
    json!({
        "properties": {"title": title},
        "sheets": tabs
            .iter()
            .map(|(id, title)| json!({"properties": {"sheetId": id, "title": title}}))
            .collect::<Vec<_>>(),
        "namedRanges": ranges
            .iter()
            .map(|(id, name, sheet_id)| json!({
                "namedRangeId": id,
                "name": name,
                "range": {"sheetId": sheet_id, "startRowIndex": 0}
            }))
            .collect::<Vec<_>>(),
    })
}
