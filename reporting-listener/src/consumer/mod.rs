//! Inbound notification consumer.
//!
//! Receives change notifications from the inbound topic one at a time, in
//! partition order. Offsets are committed only after a message has been
//! fully handled, so a crash or a fatal processing error leaves the
//! message uncommitted for the host's redelivery policy.

use rdkafka::config::ClientConfig;
use rdkafka::consumer::{CommitMode, Consumer, StreamConsumer};
use rdkafka::message::BorrowedMessage;
use tracing::info;

use crate::errors::ListenerError;

pub struct NotificationConsumer {
    consumer: StreamConsumer,
    topic: String,
}

impl NotificationConsumer {
    /// Create a consumer for the notifications topic.
    ///
    /// Auto-commit is off: the message loop owns commit timing.
    pub fn new(brokers: &str, group_id: &str, topic: impl Into<String>) -> Result<Self, ListenerError> {
        let consumer: StreamConsumer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("group.id", group_id)
            .set("enable.auto.commit", "false")
            .set("auto.offset.reset", "earliest")
            .set("session.timeout.ms", "6000")
            .create()
            .map_err(|e| ListenerError::kafka(e.to_string()))?;

        let topic = topic.into();
        info!(brokers = %brokers, group_id = %group_id, topic = %topic, "created notification consumer");

        Ok(Self { consumer, topic })
    }

    /// Subscribe to the notifications topic.
    pub fn subscribe(&self) -> Result<(), ListenerError> {
        self.consumer
            .subscribe(&[self.topic.as_str()])
            .map_err(|e| ListenerError::kafka(e.to_string()))?;
        info!(topic = %self.topic, "subscribed to notifications topic");
        Ok(())
    }

    /// Receive the next notification.
    pub async fn recv(&self) -> Result<BorrowedMessage<'_>, ListenerError> {
        self.consumer
            .recv()
            .await
            .map_err(|e| ListenerError::kafka(e.to_string()))
    }

    /// Mark a notification as handled.
    pub fn commit(&self, message: &BorrowedMessage<'_>) -> Result<(), ListenerError> {
        self.consumer
            .commit_message(message, CommitMode::Async)
            .map_err(|e| ListenerError::kafka(e.to_string()))
    }
}
