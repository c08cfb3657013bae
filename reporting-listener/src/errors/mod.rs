//! Error types for the reporting listener.
//!
//! Every variant of [`ListenerError`] is fatal for the message being
//! processed: it bubbles unchanged to the message loop, which logs the
//! message context and propagates it to the hosting runtime. Absent
//! schema fields are deliberately not an error anywhere - the record
//! builder skips them.

use thiserror::Error;
use uuid::Uuid;

use avro_record::{BuildError, SchemaParseError};
use reporting_kafka::BrokerError;

/// Errors from the upstream HTTP collaborators.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Http(String),

    /// A non-success status other than 404.
    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body could not be decoded.
    #[error("response body could not be decoded: {0}")]
    Decode(String),
}

/// Fatal errors for one inbound message.
#[derive(Error, Debug)]
pub enum ListenerError {
    /// Configuration error during startup.
    #[error("configuration error: {0}")]
    Config(String),

    /// The referenced entity does not exist upstream.
    #[error("entity {entity_id} was not found upstream")]
    NotFound { entity_id: Uuid },

    /// The notification fails a precondition checked before any I/O.
    #[error("invalid change notification: {0}")]
    InvalidMessage(String),

    /// The registry served a malformed schema document.
    #[error(transparent)]
    Schema(#[from] SchemaParseError),

    /// The entity state does not fit the registered schema.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// An upstream API call failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Topic administration, serialization or publish failed.
    #[error(transparent)]
    Broker(#[from] BrokerError),

    /// Kafka consumer error.
    #[error("Kafka error: {0}")]
    Kafka(String),
}

impl ListenerError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a Kafka error.
    pub fn kafka(msg: impl Into<String>) -> Self {
        Self::Kafka(msg.into())
    }
}

impl From<rdkafka::error::KafkaError> for ListenerError {
    fn from(err: rdkafka::error::KafkaError) -> Self {
        Self::Kafka(err.to_string())
    }
}
