//! Service-account authentication for Google APIs
//!
//! Implements the OAuth 2.0 JWT-bearer grant: a short-lived assertion signed
//! with the service account's RSA key is exchanged for an access token. The
//! token is cached and re-minted shortly before it expires.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use eventreg_domain::constants::SPREADSHEETS_SCOPE;
use eventreg_domain::{EventRegError, Result, SheetsConfig};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::errors::InfraError;
use crate::http::HttpClient;

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime requested for each signed assertion (the maximum Google allows).
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Tokens closer than this to expiry are treated as expired.
const REFRESH_MARGIN_SECS: i64 = 300;

/// Provides OAuth access tokens for Google API calls.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Retrieve a bearer token to authorize API calls.
    async fn access_token(&self) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

fn default_expires_in() -> i64 {
    ASSERTION_LIFETIME_SECS
}

struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(REFRESH_MARGIN_SECS) < self.expires_at
    }
}

/// Mints and caches access tokens for one service account.
pub struct ServiceAccountTokenProvider {
    http: HttpClient,
    client_email: String,
    token_uri: String,
    signing_key: EncodingKey,
    cached: RwLock<Option<CachedToken>>,
}

impl ServiceAccountTokenProvider {
    /// Parse the configured private key and prepare the provider.
    ///
    /// No network call is made until the first token is requested.
    ///
    /// # Errors
    /// `EventRegError::Config` when the private key is not a valid RSA PEM.
    pub fn new(config: &SheetsConfig, http: HttpClient) -> Result<Self> {
        let pem = config.normalized_private_key();
        let signing_key = EncodingKey::from_rsa_pem(pem.as_bytes()).map_err(InfraError::from)?;

        Ok(Self {
            http,
            client_email: config.service_account_email.clone(),
            token_uri: config.token_uri.clone(),
            signing_key,
            cached: RwLock::new(None),
        })
    }

    fn sign_assertion(&self, issued_at: DateTime<Utc>) -> Result<String> {
        let iat = issued_at.timestamp();
        let claims = AssertionClaims {
            iss: &self.client_email,
            scope: SPREADSHEETS_SCOPE,
            aud: &self.token_uri,
            iat,
            exp: iat + ASSERTION_LIFETIME_SECS,
        };

        let token = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &self.signing_key)
            .map_err(InfraError::from)?;
        Ok(token)
    }

    async fn mint(&self) -> Result<CachedToken> {
        let now = Utc::now();
        let assertion = self.sign_assertion(now)?;

        let request = self
            .http
            .request(Method::POST, &self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())]);

        let response = self.http.send_checked(request).await.map_err(|err| match err {
            EventRegError::Network(msg) | EventRegError::Auth(msg) => {
                EventRegError::Auth(format!("Token exchange failed: {msg}"))
            }
            other => other,
        })?;

        let token: TokenResponse = response.json().await.map_err(|e| {
            EventRegError::Auth(format!("Failed to parse token response: {e}"))
        })?;

        info!(expires_in = token.expires_in, "minted service account access token");
        Ok(CachedToken {
            access_token: token.access_token,
            expires_at: now + Duration::seconds(token.expires_in),
        })
    }
}

#[async_trait]
impl AccessTokenProvider for ServiceAccountTokenProvider {
    async fn access_token(&self) -> Result<String> {
        {
            let cached = self.cached.read().await;
            if let Some(token) = cached.as_ref().filter(|token| token.is_fresh(Utc::now())) {
                return Ok(token.access_token.clone());
            }
        }

        let mut cached = self.cached.write().await;
        // Another request may have refreshed while we waited for the lock.
        if let Some(token) = cached.as_ref().filter(|token| token.is_fresh(Utc::now())) {
            return Ok(token.access_token.clone());
        }

        debug!("access token missing or near expiry; minting a new one");
        let token = self.mint().await?;
        let access_token = token.access_token.clone();
        *cached = Some(token);
        Ok(access_token)
    }
}
