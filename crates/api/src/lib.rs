//! Diagnostics client.
//!
//! This crate fetches the hosting diagnostics payload for an environment. It
//! focuses on:
//!
//! - Constructing an HTTP client with sensible defaults
//! - Validating endpoint URLs before any request is sent
//! - Decoding the body into an [`extdash_types::DiagnosticsSnapshot`]
//!
//! The primary entry point is [`DiagnosticsClient`], which implements the
//! [`DiagnosticsSource`] trait consumed by the TUI runtime. Each call issues
//! exactly one `GET`; there is no retry and failures are returned to the
//! caller untouched.
//!
//! # Example
//!
//! ```ignore
//! use extdash_api::{ClientOptions, DiagnosticsClient, DiagnosticsSource};
//! use extdash_types::Environment;
//!
//! async fn show() -> Result<(), extdash_api::FetchError> {
//!     let client = DiagnosticsClient::new(ClientOptions::default())?;
//!     let snapshot = client.fetch(Environment::Public.url()).await?;
//!     println!("build: {}", snapshot.build_info.build_version);
//!     Ok(())
//! }
//! ```

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use extdash_types::{DiagnosticsSnapshot, Environment};
use reqwest::{Client, StatusCode, Url, header};
use thiserror::Error;
use tracing::{debug, warn};

/// Hostnames allowed for local development regardless of scheme.
const LOCALHOST_DOMAINS: &[&str] = &["localhost", "127.0.0.1"];

/// Failure while fetching or decoding a diagnostics payload.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid diagnostics endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("diagnostics endpoint {url} returned {status}")]
    Status { status: StatusCode, url: String },
    #[error("malformed diagnostics payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can produce a snapshot for an endpoint URL.
#[async_trait]
pub trait DiagnosticsSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<DiagnosticsSnapshot, FetchError>;
}

/// Client construction options.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Whole-request timeout; `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

/// Thin wrapper around a configured `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct DiagnosticsClient {
    pub http: Client,
    pub user_agent: String,
}

impl DiagnosticsClient {
    pub fn new(options: ClientOptions) -> Result<Self, FetchError> {
        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(default_headers);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            user_agent: format!("extdash/{}; {}", env!("CARGO_PKG_VERSION"), env::consts::OS),
        })
    }
}

#[async_trait]
impl DiagnosticsSource for DiagnosticsClient {
    async fn fetch(&self, url: &str) -> Result<DiagnosticsSnapshot, FetchError> {
        let endpoint = validate_endpoint(url)?;
        debug!(%endpoint, "fetching diagnostics");

        let response = self
            .http
            .get(endpoint)
            .header(header::USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, url, "diagnostics request rejected");
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let snapshot: DiagnosticsSnapshot = serde_json::from_str(&body)?;
        debug!(
            url,
            extensions = snapshot.extensions.len(),
            build = %snapshot.build_info.build_version,
            "diagnostics decoded"
        );
        Ok(snapshot)
    }
}

/// Validate that an endpoint is acceptable for a diagnostics request.
///
/// Rules:
/// - `localhost` or `127.0.0.1`: any scheme is allowed
/// - otherwise: scheme must be HTTPS, and host must be one of the
///   environment domains or a subdomain thereof
pub fn validate_endpoint(url: &str) -> Result<Url, FetchError> {
    let invalid = |reason: String| FetchError::InvalidEndpoint {
        url: url.to_string(),
        reason,
    };
    let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;
    let host_name = parsed.host_str().ok_or_else(|| invalid("missing host".into()))?.to_string();

    if LOCALHOST_DOMAINS
        .iter()
        .any(|&allowed| host_name.eq_ignore_ascii_case(allowed))
    {
        return Ok(parsed);
    }

    if parsed.scheme() != "https" {
        return Err(invalid(format!("non-local hosts must use https; got '{}://'", parsed.scheme())));
    }

    let is_allowed_domain = Environment::ALL.iter().map(Environment::domain).any(|domain| {
        host_name.eq_ignore_ascii_case(domain) || host_name.to_ascii_lowercase().ends_with(&format!(".{}", domain))
    });
    if !is_allowed_domain {
        return Err(invalid(format!("host '{}' is not a known hosting environment", host_name)));
    }

    Ok(parsed)
}
