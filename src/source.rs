use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use crate::error::FetchError;
use crate::types::Record;

/// Anything that can produce the current record sequence.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_records(&self) -> Result<Vec<Record>, FetchError>;
}

/// Fetches the feed with a single HTTP GET per call. No retries.
pub struct HttpSource {
    url: Url,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { url, client })
    }

    pub fn url(&self) -> &Url { &self.url }
}

#[async_trait]
impl RecordSource for HttpSource {
    async fn fetch_records(&self) -> Result<Vec<Record>, FetchError> {
        debug!(url = %self.url, "fetching feed");
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Network(format!("HTTP {status} from {}", self.url)));
        }
        let body = response.text().await?;
        let records = parse_payload(&body)?;
        info!(url = %self.url, count = records.len(), "feed loaded");
        Ok(records)
    }
}

/// Normalize a feed body into records.
///
/// Accepts a JSON array of records or a JSON object whose values are records;
/// object values are taken in document order.
pub fn parse_payload(body: &str) -> Result<Vec<Record>, FetchError> {
    let value: Value = serde_json::from_str(body)?;
    let items: Vec<Value> = match value {
        Value::Array(items) => items,
        Value::Object(map) => map.into_iter().map(|(_, v)| v).collect(),
        other => {
            return Err(FetchError::Parse(format!(
                "expected an array or object of records, got {}",
                json_kind(&other)
            )))
        }
    };
    items
        .into_iter()
        .enumerate()
        .map(|(i, v)| {
            serde_json::from_value::<Record>(v)
                .map_err(|e| FetchError::Parse(format!("record {i}: {e}")))
        })
        .collect()
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
