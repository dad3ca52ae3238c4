//! GraphQL HTTP client
//!
//! Provides the async transport behind [`GraphQueryExecutor`]:
//! - POSTs the standard `{query, operationName, variables}` envelope
//! - Maps transport failures, non-2xx responses, and server-reported
//!   query errors onto the crate `Error`
//!
//! Retries, caching, and authentication are deliberately absent; this
//! client carries exactly what the read-side page loaders need.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::GraphConfig;
use crate::error::{Error, Result};
use crate::graph::documents::QueryDocument;
use crate::graph::executor::GraphQueryExecutor;

/// Request timeout applied when none is configured
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// GraphQL-over-HTTP request body
#[derive(Debug, Serialize)]
struct GraphRequest<'a> {
    query: &'a str,
    #[serde(rename = "operationName")]
    operation_name: &'a str,
    #[serde(skip_serializing_if = "Value::is_null")]
    variables: Value,
}

/// GraphQL-over-HTTP response body
#[derive(Debug, Deserialize)]
struct GraphResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphErrorEntry {
    message: String,
}

/// HTTP client for the Trackline GraphQL endpoint
#[derive(Debug, Clone)]
pub struct GraphClient {
    http_client: HttpClient,
    endpoint: String,
}

/// Builder for creating a GraphClient
#[derive(Default)]
pub struct GraphClientBuilder {
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
}

impl GraphClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the GraphQL endpoint URL
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the request timeout
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Build the GraphClient
    pub fn build(self) -> Result<GraphClient> {
        let endpoint = self
            .endpoint
            .ok_or_else(|| Error::Config("GraphQL endpoint is required".to_string()))?;

        let timeout_secs = self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);

        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(Error::Network)?;

        Ok(GraphClient {
            http_client,
            endpoint,
        })
    }
}

impl GraphClient {
    /// Create a new client for the given endpoint with default settings
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        GraphClientBuilder::new().endpoint(endpoint).build()
    }

    /// Create a new builder for GraphClient
    pub fn builder() -> GraphClientBuilder {
        GraphClientBuilder::new()
    }

    /// Create a client from configuration, honoring the env override
    pub fn from_config(config: &GraphConfig) -> Result<Self> {
        GraphClientBuilder::new()
            .endpoint(config.resolved_endpoint())
            .timeout_secs(config.timeout_secs)
            .build()
    }

    /// Get the endpoint this client talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send a single query and return the raw `data` value
    async fn send_query(&self, document: &QueryDocument, variables: Value) -> Result<Value> {
        debug!(
            operation = document.operation_name,
            endpoint = %self.endpoint,
            "Sending GraphQL query"
        );

        let request = GraphRequest {
            query: document.text,
            operation_name: document.operation_name,
            variables,
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(Error::Network)?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                operation = document.operation_name,
                status = status.as_u16(),
                "GraphQL endpoint returned non-success status"
            );
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        let graph_response: GraphResponse = response
            .json()
            .await
            .map_err(|e| Error::Decode(format!("Failed to parse response: {}", e)))?;

        // Resolution errors arrive in-band with a 200; a non-empty
        // errors array fails the whole operation.
        if let Some(first) = graph_response.errors.first() {
            warn!(
                operation = document.operation_name,
                error = %first.message,
                "GraphQL operation failed"
            );
            return Err(Error::Graph(first.message.clone()));
        }

        graph_response
            .data
            .ok_or_else(|| Error::Decode("Response carried neither data nor errors".to_string()))
    }
}

#[async_trait]
impl GraphQueryExecutor for GraphClient {
    async fn execute(&self, document: &QueryDocument, variables: Value) -> Result<Value> {
        self.send_query(document, variables).await
    }
}
