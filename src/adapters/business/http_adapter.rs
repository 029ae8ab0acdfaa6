//! HTTP adapter for the business-data service.
//!
//! - `POST {base}/business-data` with a JSON body for the full fetch
//! - `GET {base}/regenerate-headline?name=..&location=..` for a new headline
//!
//! Any non-2xx status, transport failure, timeout or undecodable body maps to a `DomainError`.

use crate::domain::{BusinessRequest, BusinessResult, DomainError, HeadlineUpdate};
use crate::ports::BusinessDataPort;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

const BUSINESS_DATA_PATH: &str = "/business-data";
const REGENERATE_HEADLINE_PATH: &str = "/regenerate-headline";

/// Max characters of an error body kept for logs and errors.
const ERROR_BODY_LIMIT: usize = 200;

/// Characters left unescaped in query values: alphanumerics plus `-_.!~*'()`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// reqwest-backed implementation of [`BusinessDataPort`].
pub struct HttpBusinessAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBusinessAdapter {
    /// Create a new adapter.
    ///
    /// # Arguments
    /// * `base_url` - Service root (e.g. "http://localhost:3000"); a trailing slash is ignored
    /// * `timeout` - Per-request timeout; `None` waits indefinitely
    ///
    /// # Errors
    /// Returns `DomainError::Config` if the URL is empty or the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, DomainError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(DomainError::Config("empty service base URL".to_string()));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder
            .build()
            .map_err(|e| DomainError::Config(format!("HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn regenerate_url(&self, name: &str, location: &str) -> String {
        format!(
            "{}{}?name={}&location={}",
            self.base_url,
            REGENERATE_HEADLINE_PATH,
            encode_query_value(name),
            encode_query_value(location)
        )
    }

    /// Check status, then decode the body as `T`.
    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, DomainError> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body: String = text.chars().take(ERROR_BODY_LIMIT).collect();
            warn!(status = %status, body = %body, "business service returned error");
            return Err(DomainError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await.map_err(map_transport)?;
        serde_json::from_str(&text).map_err(|e| {
            let body: String = text.chars().take(ERROR_BODY_LIMIT).collect();
            warn!(error = %e, body = %body, "JSON parse failed");
            DomainError::MalformedResponse(e.to_string())
        })
    }
}

/// Percent-encode a single query value.
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

fn map_transport(e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        DomainError::Timeout
    } else {
        DomainError::Transport(e.to_string())
    }
}

#[async_trait::async_trait]
impl BusinessDataPort for HttpBusinessAdapter {
    async fn fetch_business_data(
        &self,
        request: &BusinessRequest,
    ) -> Result<BusinessResult, DomainError> {
        let url = format!("{}{}", self.base_url, BUSINESS_DATA_PATH);
        debug!(url = %url, "POST business data");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(map_transport)?;

        let result: BusinessResult = Self::read_json(response).await?;
        result.check_invariants()?;
        Ok(result)
    }

    async fn regenerate_headline(
        &self,
        name: &str,
        location: &str,
    ) -> Result<HeadlineUpdate, DomainError> {
        let url = self.regenerate_url(name, location);
        debug!(url = %url, "GET regenerated headline");

        let response = self.client.get(&url).send().await.map_err(map_transport)?;

        Self::read_json(response).await
    }
}
