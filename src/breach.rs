//! Breach lookup over the k-anonymity range API.
//!
//! The password is hashed with SHA-1 locally. Only the first five hex
//! characters of the digest are sent; the service answers with every
//! `SUFFIX:COUNT` pair sharing that prefix and the match happens here.
//!
//! # Environment Variables
//!
//! - `PWD_HIBP_BASE_URL`: range endpoint, the prefix is appended
//!   (default: `https://api.pwnedpasswords.com/range/`)

use std::future::Future;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::types::BreachQueryResult;

pub const DEFAULT_HIBP_BASE_URL: &str = "https://api.pwnedpasswords.com/range/";

/// Number of hex characters disclosed to the service.
pub const PREFIX_LEN: usize = 5;

const HIBP_BASE_URL_VAR: &str = "PWD_HIBP_BASE_URL";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum BreachError {
    #[error("Network error: {0}")]
    Network(#[source] BoxError),
    #[error("Breach service returned status {status}")]
    Service { status: u16 },
    #[error("Malformed breach service response: {0}")]
    MalformedResponse(String),
    #[error("Breach check cancelled")]
    Cancelled,
    #[error("Breach check timed out after {0:?}")]
    Timeout(Duration),
}

/// SHA-1 of a password split at [`PREFIX_LEN`], uppercase hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedPassword {
    pub prefix: String,
    pub suffix: String,
}

pub fn hash_password(password: &str) -> HashedPassword {
    let digest = Sha1::digest(password.as_bytes());
    let mut hex = hex::encode_upper(digest);
    let suffix = hex.split_off(PREFIX_LEN);
    HashedPassword {
        prefix: hex,
        suffix,
    }
}

/// Looks up the count for `suffix` in a range response body.
///
/// An empty body and a missing suffix both mean "not breached".
pub fn parse_range_response(body: &str, suffix: &str) -> Result<u64, BreachError> {
    for line in body.lines() {
        let Some((candidate, count)) = line.trim().split_once(':') else {
            continue;
        };
        if candidate.trim().eq_ignore_ascii_case(suffix) {
            return count
                .trim()
                .parse::<u64>()
                .map_err(|_| {
                    BreachError::MalformedResponse(format!("bad count {:?}", count.trim()))
                });
        }
    }
    Ok(0)
}

/// Anything able to return the range body for a hash prefix.
pub trait RangeSource {
    fn fetch_range(&self, prefix: &str) -> impl Future<Output = Result<String, BreachError>> + Send;
}

pub fn get_hibp_base_url() -> String {
    std::env::var(HIBP_BASE_URL_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_HIBP_BASE_URL.to_string())
}

/// HTTPS client for the range API.
#[derive(Debug, Clone)]
pub struct HibpClient {
    http: reqwest::Client,
    base_url: String,
}

impl HibpClient {
    /// Client for the endpoint in `PWD_HIBP_BASE_URL`, or the public one.
    pub fn new() -> Result<Self, BreachError> {
        Self::with_base_url(get_hibp_base_url())
    }

    /// Client for a custom endpoint. Plain HTTP requests are refused.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, BreachError> {
        let http = reqwest::Client::builder()
            .https_only(true)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BreachError::Network(Box::new(e)))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl RangeSource for HibpClient {
    async fn fetch_range(&self, prefix: &str) -> Result<String, BreachError> {
        let url = format!("{}{}", self.base_url, prefix);

        let response = self
            .http
            .get(&url)
            .header("Add-Padding", "true")
            .send()
            .await
            .map_err(|e| BreachError::Network(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BreachError::Service {
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| BreachError::Network(Box::new(e)))
    }
}

/// Runs breach lookups against a [`RangeSource`].
///
/// Holds no mutable state; concurrent checks are independent.
#[derive(Debug, Clone)]
pub struct BreachChecker<S = HibpClient> {
    source: S,
    timeout: Option<Duration>,
}

impl BreachChecker<HibpClient> {
    pub fn new() -> Result<Self, BreachError> {
        Ok(Self::with_source(HibpClient::new()?))
    }
}

impl<S: RangeSource> BreachChecker<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            timeout: None,
        }
    }

    /// Bounds each lookup. There is no deadline by default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Checks whether the password appears in the breach corpus.
    ///
    /// # Arguments
    /// * `password` - The password to check; never leaves the process
    /// * `token` - Optional cancellation token aborting the request
    pub async fn check(
        &self,
        password: &SecretString,
        token: Option<CancellationToken>,
    ) -> Result<BreachQueryResult, BreachError> {
        let hashed = hash_password(password.expose_secret());

        #[cfg(feature = "tracing")]
        tracing::debug!("Breach lookup for prefix {}", hashed.prefix);

        let result = match token {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(BreachError::Cancelled),
                    r = self.lookup(&hashed) => r,
                }
            }
            None => self.lookup(&hashed).await,
        };

        #[cfg(feature = "tracing")]
        {
            match &result {
                Ok(r) => {
                    tracing::debug!("Breach lookup for prefix {}: count {}", hashed.prefix, r.count)
                }
                Err(e) => {
                    tracing::error!("Breach lookup for prefix {} failed: {}", hashed.prefix, e)
                }
            }
        }

        result
    }

    async fn lookup(&self, hashed: &HashedPassword) -> Result<BreachQueryResult, BreachError> {
        let fetch = self.source.fetch_range(&hashed.prefix);

        let body = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, fetch)
                .await
                .map_err(|_| BreachError::Timeout(limit))??,
            None => fetch.await?,
        };

        let count = parse_range_response(&body, &hashed.suffix)?;
        Ok(BreachQueryResult { count })
    }
}

/// Checks a password against the public breach service.
pub async fn hibp_check_password(
    password: &SecretString,
    token: Option<CancellationToken>,
) -> Result<BreachQueryResult, BreachError> {
    BreachChecker::new()?.check(password, token).await
}
