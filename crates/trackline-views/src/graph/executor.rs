//! The query-execution capability page loaders are built against

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::graph::documents::QueryDocument;

/// Executes GraphQL query documents against the Trackline backend.
///
/// The trait is the seam between page loaders and the transport:
/// production code injects a [`GraphClient`](crate::graph::GraphClient),
/// tests inject a scripted fake. Implementations resolve to the raw
/// `data` value of the GraphQL response and fail with the crate
/// [`Error`] on transport problems, non-2xx responses, or
/// server-reported query errors alike.
///
/// Pass `Value::Null` as `variables` for documents that take none.
#[async_trait]
pub trait GraphQueryExecutor: Send + Sync {
    async fn execute(&self, document: &QueryDocument, variables: Value) -> Result<Value>;
}

/// Decode a raw `data` value into a typed response envelope
pub fn decode<T: DeserializeOwned>(data: Value) -> Result<T> {
    serde_json::from_value(data).map_err(|e| Error::Decode(e.to_string()))
}
