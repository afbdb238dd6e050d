//! Remote data: the daily quote service and the exercise search.
//!
//! Neither call surfaces an error to the caller. A failed quote request is
//! replaced by [`Quote::fallback`]; the exercise search is served from the
//! bundled catalog.

use crate::domain::{Exercise, Quote, exercise_catalog, search_catalog};
use serde::Deserialize;
use std::thread;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_QUOTE_ENDPOINT: &str = "https://api.quotable.io/random?tags=inspirational";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("quote service answered {0}")]
    Status(reqwest::StatusCode),
    #[error("network access is disabled")]
    Offline,
}

/// Something that can produce a quote, or fail trying.
pub trait QuoteSource: Send + Sync {
    fn fetch(&self) -> Result<Quote, GatewayError>;
}

#[derive(Debug, Deserialize)]
struct QuotableResponse {
    content: String,
    author: String,
}

/// Fetches quotes from a quotable-compatible HTTP endpoint.
pub struct HttpQuoteSource {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpQuoteSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::blocking::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint: endpoint.into() })
    }
}

impl QuoteSource for HttpQuoteSource {
    fn fetch(&self) -> Result<Quote, GatewayError> {
        let response = self.client.get(&self.endpoint).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status));
        }
        let body: QuotableResponse = response.json()?;
        Ok(Quote { text: body.content, author: body.author })
    }
}

/// A source that never reaches the network.
pub struct OfflineQuoteSource;

impl QuoteSource for OfflineQuoteSource {
    fn fetch(&self) -> Result<Quote, GatewayError> {
        Err(GatewayError::Offline)
    }
}

pub struct RemoteGateway {
    quotes: Box<dyn QuoteSource>,
    catalog: Vec<Exercise>,
    latency: Duration,
}

impl RemoteGateway {
    /// `latency` is the artificial delay applied to every exercise search.
    pub fn new(quotes: Box<dyn QuoteSource>, latency: Duration) -> Self {
        Self { quotes, catalog: exercise_catalog(), latency }
    }

    pub fn fetch_daily_quote(&self) -> Quote {
        match self.quotes.fetch() {
            Ok(quote) => quote,
            Err(err) => {
                tracing::info!(error = %err, "quote service unavailable, using fallback");
                Quote::fallback()
            }
        }
    }

    pub fn search_exercises(&self, query: &str) -> Vec<Exercise> {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
        let results = search_catalog(&self.catalog, query);
        tracing::debug!(query, results = results.len(), "exercise search");
        results
    }
}
