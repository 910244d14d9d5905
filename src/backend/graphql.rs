//! GraphQL client for the managed backend.
//!
//! All validation of the wire format happens here, at the service
//! boundary: responses are deserialized into typed envelopes and either
//! a typed value or a typed [`BackendError`] comes out. UI code never
//! sees raw JSON.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tokio::time::timeout;

use crate::backend::error::BackendError;
use crate::backend::types::{GeneratedQuote, QuoteCounterRecord};
use crate::backend::QuoteBackend;
use crate::config::Config;

/// Read query for the counter record, keyed by query name.
const COUNTER_QUERY: &str = "query quotesQueryName($queryName: String!) { \
     quotesQueryName(queryName: $queryName) { \
     items { id queryName quotesGenerated createdAt updatedAt } } }";

/// Generate operation: produces a quote and increments the shared counter.
const GENERATE_MUTATION: &str =
    "mutation generateQuote { generateQuote { quoteText quotesGenerated } }";

/// Header carrying the API key, when one is configured.
const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, serde::Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

#[derive(Debug, Deserialize)]
struct CounterQueryData {
    #[serde(rename = "quotesQueryName")]
    quotes_query_name: CounterItems,
}

#[derive(Debug, Deserialize)]
struct CounterItems {
    items: Vec<QuoteCounterRecord>,
}

#[derive(Debug, Deserialize)]
struct GenerateData {
    #[serde(rename = "generateQuote")]
    generate_quote: GeneratedQuote,
}

/// Concrete [`QuoteBackend`] over HTTP.
pub struct GraphQlBackend {
    client: Client,
    api_url: String,
    api_key: Option<String>,
    read_timeout: Duration,
    generate_timeout: Duration,
}

impl GraphQlBackend {
    /// Build a client from configuration, resolving the API key from the
    /// configured environment variable. A missing key is not an error;
    /// the request is simply sent unauthenticated.
    pub fn from_config(config: &Config) -> Result<Self, BackendError> {
        let api_key = std::env::var(&config.backend.api_key_env_var).ok();
        if api_key.is_none() {
            tracing::warn!(
                env_var = %config.backend.api_key_env_var,
                "no API key in environment, sending unauthenticated requests"
            );
        }
        Self::with_api_key(config, api_key)
    }

    /// Build a client with an explicit API key (or none).
    pub fn with_api_key(config: &Config, api_key: Option<String>) -> Result<Self, BackendError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(
                config.backend.connect_timeout_seconds.into(),
            ))
            .build()
            .map_err(|source| BackendError::Transport { source })?;

        Ok(Self {
            client,
            api_url: config.backend.api_url.clone(),
            api_key,
            read_timeout: Duration::from_secs(config.backend.timeout_seconds.into()),
            generate_timeout: Duration::from_secs(config.generator.timeout_seconds.into()),
        })
    }

    /// POST one GraphQL document and decode the typed envelope.
    async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        query: &'static str,
        variables: serde_json::Value,
        deadline: Duration,
    ) -> Result<T, BackendError> {
        let request = GraphQlRequest { query, variables };

        let mut builder = self.client.post(&self.api_url).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.header(API_KEY_HEADER, key);
        }

        let result = timeout(deadline, builder.send()).await;
        let response = match result {
            Ok(response) => response.map_err(|source| BackendError::Transport { source })?,
            Err(_) => {
                return Err(BackendError::Timeout {
                    secs: deadline.as_secs(),
                })
            }
        };

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| BackendError::Transport { source })?;

        let envelope: GraphQlResponse<T> =
            serde_json::from_slice(&body).map_err(|e| BackendError::Shape(e.to_string()))?;

        if let Some(error) = envelope.errors.into_iter().next() {
            return Err(BackendError::Rejected {
                message: error.message,
            });
        }

        envelope
            .data
            .ok_or_else(|| BackendError::Shape("response envelope has no data".to_string()))
    }
}

#[async_trait]
impl QuoteBackend for GraphQlBackend {
    async fn fetch_counter(&self, query_name: &str) -> Result<QuoteCounterRecord, BackendError> {
        let variables = serde_json::json!({ "queryName": query_name });
        let data: CounterQueryData = self
            .execute(COUNTER_QUERY, variables, self.read_timeout)
            .await?;

        // Only the first item is meaningful: at most one record exists
        // per query name.
        data.quotes_query_name
            .items
            .into_iter()
            .next()
            .ok_or_else(|| BackendError::MissingRecord {
                query_name: query_name.to_string(),
            })
    }

    async fn generate_quote(&self) -> Result<GeneratedQuote, BackendError> {
        let data: GenerateData = self
            .execute(
                GENERATE_MUTATION,
                serde_json::Value::Null,
                self.generate_timeout,
            )
            .await?;
        Ok(data.generate_quote)
    }
}
