//! Tenure change processing.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use avro_record::{build_record, SchemaNode, ToSource};

use crate::boundary::EntityEvent;
use crate::domain::ChangeEnvelope;
use crate::errors::ListenerError;
use crate::gateway::{RecordPublisher, SchemaSource, TenureApi};
use crate::use_case::MessageProcessing;

/// Envelope payload field name for tenure records.
const PAYLOAD_FIELD: &str = "Tenure";

/// Processes tenure change notifications: fetches the tenure, converts it
/// against the topic's registered schema and publishes the result.
pub struct TenureUseCase {
    api: Arc<dyn TenureApi>,
    schemas: Arc<dyn SchemaSource>,
    publisher: Arc<dyn RecordPublisher>,
    topic: String,
}

impl TenureUseCase {
    pub fn new(
        api: Arc<dyn TenureApi>,
        schemas: Arc<dyn SchemaSource>,
        publisher: Arc<dyn RecordPublisher>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            api,
            schemas,
            publisher,
            topic: topic.into(),
        }
    }
}

#[async_trait]
impl MessageProcessing for TenureUseCase {
    #[instrument(
        skip(self, event),
        fields(entity_id = %event.entity_id, correlation_id = %event.correlation_id)
    )]
    async fn process_message(&self, event: &EntityEvent) -> Result<(), ListenerError> {
        if event.entity_id.is_nil() {
            return Err(ListenerError::InvalidMessage(
                "entity id is nil".to_string(),
            ));
        }

        let tenure = self
            .api
            .tenure_by_id(event.entity_id, event.correlation_id)
            .await?
            .ok_or(ListenerError::NotFound {
                entity_id: event.entity_id,
            })?;

        let schema_document = self.schemas.latest_schema(&self.topic).await?;
        let schema = SchemaNode::parse(&schema_document.definition)?;

        let envelope = ChangeEnvelope::wrap(PAYLOAD_FIELD, tenure.to_source(), event);
        let record = build_record(&envelope.to_source(), &schema)?;

        self.publisher.ensure_topic(&self.topic).await?;
        let outcome = self
            .publisher
            .publish_record(
                &self.topic,
                &record,
                &schema_document,
                &event.entity_id.to_string(),
            )
            .await?;
        debug!(success = outcome.success, "publish acknowledged");

        Ok(())
    }
}
