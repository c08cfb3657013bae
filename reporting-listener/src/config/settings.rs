//! Settings loaded from environment variables.

use std::env;

use tracing::warn;

use crate::errors::ListenerError;

/// Default Kafka broker address.
const DEFAULT_KAFKA_BROKER: &str = "localhost:9092";

/// Default Kafka consumer group ID.
const DEFAULT_KAFKA_GROUP_ID: &str = "reporting-data-listener";

/// Default inbound notifications topic.
const DEFAULT_NOTIFICATIONS_TOPIC: &str = "entity.changes";

/// Default outbound reporting topics.
const DEFAULT_TENURE_TOPIC: &str = "reporting.tenure";
const DEFAULT_CONTACT_DETAILS_TOPIC: &str = "reporting.contact-details";

/// Default schema registry URL.
const DEFAULT_SCHEMA_REGISTRY_URL: &str = "http://localhost:8081";

/// Default partition count and replication factor for created topics.
const DEFAULT_TOPIC_PARTITIONS: i32 = 3;
const DEFAULT_TOPIC_REPLICATION: i32 = 1;

/// Runtime configuration for the listener.
#[derive(Debug, Clone)]
pub struct Settings {
    pub kafka_broker: String,
    pub kafka_group_id: String,
    pub notifications_topic: String,
    pub tenure_topic: String,
    pub contact_details_topic: String,
    pub schema_registry_url: String,
    pub tenure_api_url: String,
    pub tenure_api_token: Option<String>,
    pub contact_details_api_url: String,
    pub contact_details_api_token: Option<String>,
    pub topic_partitions: i32,
    pub topic_replication: i32,
}

impl Settings {
    /// Load settings from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `KAFKA_BROKER`: broker address (default: localhost:9092)
    /// - `KAFKA_GROUP_ID`: consumer group ID (default: reporting-data-listener)
    /// - `NOTIFICATIONS_TOPIC`: inbound topic (default: entity.changes)
    /// - `TENURE_TOPIC`: outbound tenure topic (default: reporting.tenure)
    /// - `CONTACT_DETAILS_TOPIC`: outbound contact details topic
    ///   (default: reporting.contact-details)
    /// - `SCHEMA_REGISTRY_URL`: schema registry (default: http://localhost:8081)
    /// - `TENURE_API_URL`: upstream tenure API base URL (required)
    /// - `TENURE_API_TOKEN`: tenure API auth token (optional)
    /// - `CONTACT_DETAILS_API_URL`: upstream contact details API base URL (required)
    /// - `CONTACT_DETAILS_API_TOKEN`: contact details API auth token (optional)
    /// - `TOPIC_PARTITIONS`: partition count for created topics (default: 3)
    /// - `TOPIC_REPLICATION`: replication factor for created topics (default: 1)
    pub fn from_env() -> Result<Self, ListenerError> {
        Ok(Self {
            kafka_broker: env_or("KAFKA_BROKER", DEFAULT_KAFKA_BROKER),
            kafka_group_id: env_or("KAFKA_GROUP_ID", DEFAULT_KAFKA_GROUP_ID),
            notifications_topic: env_or("NOTIFICATIONS_TOPIC", DEFAULT_NOTIFICATIONS_TOPIC),
            tenure_topic: env_or("TENURE_TOPIC", DEFAULT_TENURE_TOPIC),
            contact_details_topic: env_or(
                "CONTACT_DETAILS_TOPIC",
                DEFAULT_CONTACT_DETAILS_TOPIC,
            ),
            schema_registry_url: env_or("SCHEMA_REGISTRY_URL", DEFAULT_SCHEMA_REGISTRY_URL),
            tenure_api_url: required("TENURE_API_URL")?,
            tenure_api_token: env::var("TENURE_API_TOKEN").ok(),
            contact_details_api_url: required("CONTACT_DETAILS_API_URL")?,
            contact_details_api_token: env::var("CONTACT_DETAILS_API_TOKEN").ok(),
            topic_partitions: parsed_or("TOPIC_PARTITIONS", DEFAULT_TOPIC_PARTITIONS),
            topic_replication: parsed_or("TOPIC_REPLICATION", DEFAULT_TOPIC_REPLICATION),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn required(key: &str) -> Result<String, ListenerError> {
    env::var(key).map_err(|_| ListenerError::config(format!("{key} is not set")))
}

fn parsed_or(key: &str, default: i32) -> i32 {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "not a number, using default");
            default
        }),
        Err(_) => default,
    }
}
