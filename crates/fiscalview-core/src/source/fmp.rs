use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{decode_records, FetchError, FetchOutcome, RecordSource};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::retry::RetryConfig;
use crate::Symbol;

pub const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";

const API_KEY_ENV: &str = "FISCALVIEW_API_KEY";
const BASE_URL_ENV: &str = "FISCALVIEW_BASE_URL";

/// Endpoint, credentials, and retry policy for [`FmpSource`].
#[derive(Debug, Clone, PartialEq)]
pub struct SourceConfig {
    pub base_url: String,
    pub api_key: String,
    pub symbol: Symbol,
    pub timeout_ms: u64,
    pub retry: RetryConfig,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            api_key: String::from("demo"),
            symbol: Symbol::default(),
            timeout_ms: 3_000,
            retry: RetryConfig::default(),
        }
    }
}

impl SourceConfig {
    /// Defaults overridden by `FISCALVIEW_API_KEY` and `FISCALVIEW_BASE_URL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();
        Self {
            base_url: non_empty(BASE_URL_ENV).unwrap_or(defaults.base_url),
            api_key: non_empty(API_KEY_ENV).unwrap_or(defaults.api_key),
            ..defaults
        }
    }

    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = symbol;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Annual income statement URL for the configured symbol.
    pub fn endpoint_url(&self) -> String {
        self.url_with_key(&urlencoding::encode(&self.api_key))
    }

    /// Same as [`endpoint_url`](Self::endpoint_url) with the API key masked.
    pub fn redacted_url(&self) -> String {
        self.url_with_key("***")
    }

    fn url_with_key(&self, key: &str) -> String {
        format!(
            "{}/income-statement/{}?period=annual&apikey={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(self.symbol.as_str()),
            key
        )
    }
}

/// Annual income statements from Financial Modeling Prep.
#[derive(Clone)]
pub struct FmpSource {
    config: SourceConfig,
    http_client: Arc<dyn HttpClient>,
}

impl FmpSource {
    pub fn new(config: SourceConfig) -> Self {
        Self::with_http_client(config, Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_http_client(config: SourceConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            http_client,
        }
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    async fn fetch_with_retry(&self) -> Result<FetchOutcome, FetchError> {
        let retry = &self.config.retry;
        let request = HttpRequest::get(self.config.endpoint_url())
            .with_header("accept", "application/json")
            .with_timeout_ms(self.config.timeout_ms);

        let mut attempt = 0_u32;
        loop {
            debug!(url = %self.config.redacted_url(), attempt, "requesting income statements");
            let error = match self.http_client.execute(request.clone()).await {
                Ok(response) if response.is_success() => {
                    let outcome = decode_records(&response.body)?;
                    info!(
                        symbol = %self.config.symbol,
                        records = outcome.records.len(),
                        skipped = outcome.skipped,
                        "loaded income statements"
                    );
                    return Ok(outcome);
                }
                Ok(response) => {
                    let retryable = retry.should_retry_status(response.status);
                    let error = FetchError::status(response.status).with_retryable(retryable);
                    if !retryable {
                        return Err(error);
                    }
                    error
                }
                Err(transport) => {
                    let error = FetchError::transport(
                        format!("An error occurred while fetching data: {}", transport.message()),
                        transport.retryable(),
                    );
                    if !(transport.retryable() && retry.retry_on_transport) {
                        return Err(error);
                    }
                    error
                }
            };

            if attempt >= retry.max_retries {
                return Err(error);
            }
            let delay = retry.delay_for_attempt(attempt);
            warn!(
                code = error.code(),
                reason = error.message(),
                retry_in_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "fetch failed, retrying"
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

impl RecordSource for FmpSource {
    fn describe(&self) -> String {
        self.config.redacted_url()
    }

    fn fetch<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<FetchOutcome, FetchError>> + Send + 'a>> {
        Box::pin(self.fetch_with_retry())
    }
}
