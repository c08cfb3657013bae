//! Shared Kafka plumbing for the reporting listener.
//!
//! This crate provides the broker-facing pieces the listener binary wires
//! together: producer construction with optional SASL/SSL, topic
//! administration (create-if-absent), a publish call that waits for the
//! broker's acknowledgment, and the Avro binary codec that serializes
//! built records against their registry schema.
//!
//! ## Usage
//!
//! ```ignore
//! use reporting_kafka::{codec, ensure_topic, publish, ProducerSettings, TopicSettings};
//!
//! let settings = ProducerSettings::from_env("localhost:9092", "reporting-data-listener");
//! let producer = reporting_kafka::create_producer(&settings)?;
//! let admin = reporting_kafka::create_admin(&settings)?;
//!
//! ensure_topic(&admin, "reporting.tenure", &TopicSettings::default()).await?;
//! let payload = codec::encode(&record, &schema_definition)?;
//! let delivery = publish(&producer, "reporting.tenure", "key", &payload).await?;
//! ```

use std::env;
use std::time::Duration;

use rdkafka::config::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::util::Timeout;
use tracing::debug;

pub mod admin;
pub mod codec;
mod error;

pub use admin::{create_admin, ensure_topic, TopicSettings};
pub use error::{BrokerError, CodecError};

/// How long a publish waits for the broker acknowledgment before the
/// attempt is reported as failed.
const ACK_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the broker clients.
#[derive(Debug, Clone)]
pub struct ProducerSettings {
    /// Kafka broker address (e.g., "localhost:9092")
    pub broker: String,
    /// Client ID reported to the broker
    pub client_id: String,
    /// SASL username (enables SASL/SSL if set)
    pub username: Option<String>,
    /// SASL password (required if username is set)
    pub password: Option<String>,
    /// Custom CA certificate in PEM format
    pub ssl_ca_pem: Option<String>,
}

impl ProducerSettings {
    /// Create settings with the given broker and client id.
    pub fn new(broker: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            broker: broker.into(),
            client_id: client_id.into(),
            username: None,
            password: None,
            ssl_ca_pem: None,
        }
    }

    /// Create settings from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `KAFKA_BROKER` - broker address (uses the provided default if not set)
    /// - `KAFKA_USERNAME` - SASL username (optional)
    /// - `KAFKA_PASSWORD` - SASL password (optional)
    /// - `KAFKA_SSL_CA_PEM` - custom CA cert in PEM format (optional)
    pub fn from_env(default_broker: &str, client_id: impl Into<String>) -> Self {
        Self {
            broker: env::var("KAFKA_BROKER").unwrap_or_else(|_| default_broker.to_string()),
            client_id: client_id.into(),
            username: env::var("KAFKA_USERNAME").ok(),
            password: env::var("KAFKA_PASSWORD").ok(),
            ssl_ca_pem: env::var("KAFKA_SSL_CA_PEM").ok(),
        }
    }

    /// Set SASL credentials.
    pub fn with_credentials(mut self, username: String, password: String) -> Self {
        self.username = Some(username);
        self.password = Some(password);
        self
    }

    /// Base client configuration shared by the producer and admin clients.
    ///
    /// If SASL credentials are present, SASL/SSL is enabled (managed
    /// Kafka); otherwise the connection stays plaintext (local
    /// development).
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new();

        config
            .set("bootstrap.servers", &self.broker)
            .set("client.id", &self.client_id)
            .set("compression.type", "zstd")
            .set("message.timeout.ms", "10000");

        if let (Some(username), Some(password)) = (&self.username, &self.password) {
            config
                .set("security.protocol", "SASL_SSL")
                .set("sasl.mechanisms", "PLAIN")
                .set("sasl.username", username)
                .set("sasl.password", password);

            if let Some(ca_pem) = &self.ssl_ca_pem {
                config.set("ssl.ca.pem", ca_pem);
            }
        }

        config
    }
}

/// The broker's acknowledgment for one accepted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    pub partition: i32,
    pub offset: i64,
}

/// Create a Kafka producer with the given settings.
pub fn create_producer(settings: &ProducerSettings) -> Result<FutureProducer, BrokerError> {
    settings
        .client_config()
        .create()
        .map_err(|e| BrokerError::Creation(e.to_string()))
}

/// Produce one record and wait for the broker's acknowledgment.
///
/// Returns the partition and offset the broker assigned. Any
/// broker-reported error - including the acknowledgment timing out - is
/// surfaced as a [`BrokerError::Publish`]; nothing is swallowed or
/// retried here.
pub async fn publish(
    producer: &FutureProducer,
    topic: &str,
    key: &str,
    payload: &[u8],
) -> Result<Delivery, BrokerError> {
    let record = FutureRecord::to(topic).key(key).payload(payload);

    let (partition, offset) = producer
        .send(record, Timeout::After(ACK_TIMEOUT))
        .await
        .map_err(|(err, _)| BrokerError::Publish {
            reason: err.to_string(),
        })?;

    debug!(topic, partition, offset, "broker acknowledged record");
    Ok(Delivery { partition, offset })
}
