//! GraphQL client for the indexer management API.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Default HTTP timeout for management API requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client bound to one indexer management API endpoint.
#[derive(Debug, Clone)]
pub struct IndexerManagementClient {
    http: Client,
    endpoint: Url,
}

#[derive(Serialize)]
struct GraphqlRequest<'a, V: Serialize> {
    query: &'a str,
    variables: V,
}

#[derive(Deserialize)]
struct GraphqlResponse {
    data: Option<serde_json::Value>,
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

impl IndexerManagementClient {
    /// Create a client for the management API at `url`.
    pub fn new(url: &str) -> Result<Self, CoreError> {
        let endpoint =
            Url::parse(url).map_err(|_| CoreError::InvalidEndpoint(url.to_string()))?;
        let http = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;

        Ok(Self { http, endpoint })
    }

    /// Endpoint this client is bound to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Execute one GraphQL operation and decode its `data` payload into `T`.
    pub async fn execute<V, T>(&self, query: &str, variables: V) -> Result<T, CoreError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&GraphqlRequest { query, variables })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CoreError::Api(format!(
                "management API returned {}: {}",
                status,
                body.trim()
            )));
        }

        let body: serde_json::Value = response.json().await?;
        decode_response(body)
    }
}

/// Decode a GraphQL response envelope, surfacing server-reported errors
/// before attempting to decode `data`.
fn decode_response<T: DeserializeOwned>(body: serde_json::Value) -> Result<T, CoreError> {
    let envelope: GraphqlResponse = serde_json::from_value(body)?;

    if let Some(errors) = envelope.errors {
        if !errors.is_empty() {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(CoreError::Api(messages.join("; ")));
        }
    }

    let data = envelope
        .data
        .ok_or_else(|| CoreError::Api("response contained no data".to_string()))?;

    Ok(serde_json::from_value(data)?)
}
