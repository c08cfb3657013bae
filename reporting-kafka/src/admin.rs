//! Topic administration.
//!
//! The listener publishes to topics that may not exist yet in a fresh
//! cluster; `ensure_topic` creates them on first use with fixed,
//! configured partition and replication settings. A pre-existing topic
//! is a no-op, not an error - including the race where another instance
//! created it between the metadata check and the create call.

use std::time::Duration;

use rdkafka::admin::{AdminClient, AdminOptions, NewTopic, TopicReplication};
use rdkafka::client::DefaultClientContext;
use rdkafka::types::RDKafkaErrorCode;
use tracing::{debug, info};

use crate::error::BrokerError;
use crate::ProducerSettings;

/// Timeout for cluster metadata queries.
const METADATA_TIMEOUT: Duration = Duration::from_secs(10);

/// Fixed settings applied to topics this service creates. These come
/// from configuration, never from load heuristics.
#[derive(Debug, Clone, Copy)]
pub struct TopicSettings {
    pub partitions: i32,
    pub replication: i32,
}

impl Default for TopicSettings {
    fn default() -> Self {
        Self {
            partitions: 3,
            replication: 1,
        }
    }
}

/// Create an admin client with the given settings.
pub fn create_admin(
    settings: &ProducerSettings,
) -> Result<AdminClient<DefaultClientContext>, BrokerError> {
    settings
        .client_config()
        .create()
        .map_err(|e| BrokerError::Creation(e.to_string()))
}

/// Create `topic` if the cluster does not already have it.
pub async fn ensure_topic(
    admin: &AdminClient<DefaultClientContext>,
    topic: &str,
    settings: &TopicSettings,
) -> Result<(), BrokerError> {
    let metadata = admin
        .inner()
        .fetch_metadata(None, METADATA_TIMEOUT)
        .map_err(|e| BrokerError::Admin(e.to_string()))?;

    if metadata.topics().iter().any(|t| t.name() == topic) {
        debug!(topic, "topic already exists");
        return Ok(());
    }

    let new_topic = NewTopic::new(
        topic,
        settings.partitions,
        TopicReplication::Fixed(settings.replication),
    );
    let results = admin
        .create_topics([&new_topic], &AdminOptions::new())
        .await
        .map_err(|e| BrokerError::Admin(e.to_string()))?;

    for result in results {
        match result {
            Ok(name) => {
                info!(
                    topic = %name,
                    partitions = settings.partitions,
                    replication = settings.replication,
                    "created topic"
                );
            }
            Err((name, RDKafkaErrorCode::TopicAlreadyExists)) => {
                debug!(topic = %name, "topic created concurrently");
            }
            Err((name, code)) => {
                return Err(BrokerError::Admin(format!(
                    "failed to create topic `{name}`: {code}"
                )));
            }
        }
    }

    Ok(())
}
