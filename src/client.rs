//! Subgraph HTTP client and response flattening.
//!
//! Posts GraphQL documents built by [`GraphQuery`] and flattens the returned
//! entity array into a [`Frame`]: each requested path becomes one column named
//! `<entity>_<path>` with dots replaced by underscores.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::{json, Value};

use crate::error::{PolygraphError, Result};
use crate::frame::Frame;
use crate::models::SubgraphRef;
use crate::query_builder::GraphQuery;

/// Sends one JSON request body to a URL and returns the JSON response.
pub trait Transport: Send + Sync {
    fn post_json(&self, url: &str, body: &Value) -> Result<Value>;
}

/// Blocking `reqwest` transport.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a transport. `None` leaves requests without a timeout.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, url: &str, body: &Value) -> Result<Value> {
        let resp = self.client.post(url).json(body).send()?.error_for_status()?;
        Ok(resp.json()?)
    }
}

/// Runs [`GraphQuery`] documents against subgraph endpoints.
pub struct SubgraphClient {
    transport: Box<dyn Transport>,
}

impl SubgraphClient {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Execute a raw GraphQL document and return its `data` object.
    ///
    /// A non-empty `errors` array (typically a field missing from this
    /// subgraph's schema) becomes [`PolygraphError::GraphQl`].
    pub fn execute(&self, subgraph: &SubgraphRef, document: &str) -> Result<Value> {
        let body = json!({ "query": document });
        let mut resp = self.transport.post_json(&subgraph.url, &body)?;

        if let Some(errors) = resp.get("errors").and_then(|e| e.as_array()) {
            if !errors.is_empty() {
                let messages: Vec<String> = errors
                    .iter()
                    .map(|e| {
                        e.get("message")
                            .and_then(|m| m.as_str())
                            .map(|s| s.to_string())
                            .unwrap_or_else(|| e.to_string())
                    })
                    .collect();
                return Err(PolygraphError::GraphQl(format!(
                    "{}: {}",
                    subgraph.name,
                    messages.join("; ")
                )));
            }
        }

        match resp.get_mut("data").map(Value::take) {
            Some(data) if data.is_object() => Ok(data),
            _ => Err(PolygraphError::GraphQl(format!(
                "{}: response has no data object",
                subgraph.name
            ))),
        }
    }

    /// Execute `query` and flatten the entity rows into a [`Frame`].
    pub fn query(&self, subgraph: &SubgraphRef, query: &GraphQuery) -> Result<Frame> {
        let document = query.build();
        let data = self.execute(subgraph, &document)?;
        let entity = query.entity();

        let rows = data
            .get(entity)
            .and_then(|v| v.as_array())
            .ok_or_else(|| {
                PolygraphError::GraphQl(format!(
                    "{}: response has no '{}' array",
                    subgraph.name, entity
                ))
            })?;

        let frame = flatten(entity, query.paths(), rows);
        tracing::debug!(
            subgraph = %subgraph.name,
            entity,
            rows = frame.len(),
            "subgraph query complete"
        );
        Ok(frame)
    }
}

/// Column name for a projected path: `swaps` + `protocol.name` gives
/// `swaps_protocol_name`.
pub fn column_name(entity: &str, path: &str) -> String {
    format!("{}_{}", entity, path.replace('.', "_"))
}

fn flatten(entity: &str, paths: &[String], rows: &[Value]) -> Frame {
    let columns = paths.iter().map(|p| column_name(entity, p)).collect();
    let mut frame = Frame::new(columns);
    for row in rows {
        let cells = paths
            .iter()
            .map(|p| lookup(row, p).cloned().unwrap_or(Value::Null))
            .collect();
        frame.push_row(cells);
    }
    frame
}

fn lookup<'v>(row: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.').try_fold(row, |v, key| v.get(key))
}
