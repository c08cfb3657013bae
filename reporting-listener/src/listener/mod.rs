//! The message loop and event-type dispatch.

use rdkafka::message::Message;
use tracing::{error, info, warn};

use crate::consumer::NotificationConsumer;
use crate::errors::ListenerError;
use crate::use_case::UseCaseRegistry;

/// Routes one raw notification body to its registered processor.
///
/// Split from the consuming loop so dispatch behavior is testable without
/// a broker.
pub struct Dispatcher {
    registry: UseCaseRegistry,
}

impl Dispatcher {
    pub fn new(registry: UseCaseRegistry) -> Self {
        Self { registry }
    }

    /// Handle one raw message body.
    ///
    /// Malformed bodies and unknown event types are logged and skipped -
    /// a poison message must not wedge the queue. Processing failures for
    /// well-formed notifications are logged with the full message context
    /// and propagated, so the host's redelivery policy applies.
    pub async fn dispatch(&self, body: &str) -> Result<(), ListenerError> {
        let event: crate::boundary::EntityEvent = match serde_json::from_str(body) {
            Ok(event) => event,
            Err(error) => {
                warn!(%error, "discarding malformed change notification");
                return Ok(());
            }
        };

        let Some(processor) = self.registry.for_event_type(&event.event_type) else {
            info!(
                message_id = %event.id,
                event_type = %event.event_type,
                entity_id = %event.entity_id,
                "no processor registered for event type, ignoring"
            );
            return Ok(());
        };

        if let Err(err) = processor.process_message(&event).await {
            error!(
                message_id = %event.id,
                event_type = %event.event_type,
                entity_id = %event.entity_id,
                correlation_id = %event.correlation_id,
                error = %err,
                "failed to process change notification"
            );
            return Err(err);
        }

        Ok(())
    }
}

/// Consumes notifications and drives the dispatcher.
pub struct Listener {
    consumer: NotificationConsumer,
    dispatcher: Dispatcher,
}

impl Listener {
    pub fn new(consumer: NotificationConsumer, dispatcher: Dispatcher) -> Self {
        Self {
            consumer,
            dispatcher,
        }
    }

    /// Run the message loop until a fatal error.
    ///
    /// A processing failure stops the loop with the offset uncommitted;
    /// the hosting runtime restarts the process and the broker redelivers
    /// the message.
    pub async fn run(&self) -> Result<(), ListenerError> {
        self.consumer.subscribe()?;
        info!("listening for change notifications");

        loop {
            let message = self.consumer.recv().await?;

            let body = match message.payload_view::<str>() {
                Some(Ok(body)) => body,
                Some(Err(_)) => {
                    warn!("discarding non-UTF-8 notification payload");
                    self.consumer.commit(&message)?;
                    continue;
                }
                None => {
                    warn!("discarding empty notification payload");
                    self.consumer.commit(&message)?;
                    continue;
                }
            };

            self.dispatcher.dispatch(body).await?;
            self.consumer.commit(&message)?;
        }
    }
}
