//! Schema registry gateway.
//!
//! The reporting schemas are externally managed and versioned; the
//! listener fetches the latest value schema registered for a topic before
//! every conversion. Both catalog styles the platform has used - the
//! HTTP registry addressed by subject and the managed catalog addressed
//! by registry/arn/name - reduce to the [`SchemaSource`] seam: one schema
//! definition string plus version metadata.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::errors::GatewayError;

/// One fetched schema: the definition the record builder parses, plus
/// the registry metadata the codec frames messages with.
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    pub definition: String,
    pub version: i32,
    pub id: Option<i32>,
}

/// A provider of the latest registered schema for a topic.
#[async_trait]
pub trait SchemaSource: Send + Sync {
    async fn latest_schema(&self, topic: &str) -> Result<SchemaDocument, GatewayError>;
}

/// HTTP schema registry client (Confluent-style subject API).
pub struct SchemaRegistryGateway {
    http: Client,
    base_url: String,
}

impl SchemaRegistryGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RegistryResponse {
    #[serde(default)]
    id: Option<i32>,
    version: i32,
    schema: String,
}

#[async_trait]
impl SchemaSource for SchemaRegistryGateway {
    async fn latest_schema(&self, topic: &str) -> Result<SchemaDocument, GatewayError> {
        let url = format!("{}/subjects/{topic}-value/versions/latest", self.base_url);
        debug!(%url, "fetching latest schema");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GatewayError::Status {
                url,
                status: response.status().as_u16(),
            });
        }

        let body: RegistryResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))?;

        Ok(SchemaDocument {
            definition: body.schema,
            version: body.version,
            id: body.id,
        })
    }
}
