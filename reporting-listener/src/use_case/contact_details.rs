//! Contact details change processing.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use avro_record::{build_record, SchemaNode, ToSource};

use crate::boundary::EntityEvent;
use crate::domain::ChangeEnvelope;
use crate::errors::ListenerError;
use crate::gateway::{ContactDetailsApi, RecordPublisher, SchemaSource};
use crate::use_case::MessageProcessing;

/// Envelope payload field name for contact details records.
const PAYLOAD_FIELD: &str = "ContactDetails";

/// Processes contact details change notifications.
pub struct ContactDetailsUseCase {
    api: Arc<dyn ContactDetailsApi>,
    schemas: Arc<dyn SchemaSource>,
    publisher: Arc<dyn RecordPublisher>,
    topic: String,
}

impl ContactDetailsUseCase {
    pub fn new(
        api: Arc<dyn ContactDetailsApi>,
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
impl MessageProcessing for ContactDetailsUseCase {
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

        let contact_details = self
            .api
            .contact_details_by_target_id(event.entity_id, event.correlation_id)
            .await?
            .ok_or(ListenerError::NotFound {
                entity_id: event.entity_id,
            })?;

        let schema_document = self.schemas.latest_schema(&self.topic).await?;
        let schema = SchemaNode::parse(&schema_document.definition)?;

        let envelope = ChangeEnvelope::wrap(PAYLOAD_FIELD, contact_details.to_source(), event);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactDetails;
    use crate::errors::GatewayError;
    use crate::gateway::{DeliveryOutcome, SchemaDocument};
    use avro_record::{WireRecord, WireValue};
    use chrono::{TimeZone, Utc};
    use std::sync::Mutex;
    use uuid::Uuid;

    const SCHEMA: &str = r#"{
        "type": "record",
        "name": "ContactDetailEvent",
        "fields": [
            {"name": "Id", "type": "string"},
            {"name": "EventType", "type": "string"},
            {"name": "ContactDetails", "type": {
                "type": "record",
                "name": "ContactDetails",
                "fields": [
                    {"name": "Id", "type": "string"},
                    {"name": "RecordValidUntil", "type": ["null", "int"]}
                ]
            }}
        ]
    }"#;

    struct FakeContactDetailsApi {
        details: Option<ContactDetails>,
    }

    #[async_trait]
    impl ContactDetailsApi for FakeContactDetailsApi {
        async fn contact_details_by_target_id(
            &self,
            _target_id: Uuid,
            _correlation_id: Uuid,
        ) -> Result<Option<ContactDetails>, GatewayError> {
            Ok(self.details.clone())
        }
    }

    struct FakeSchemaSource;

    #[async_trait]
    impl SchemaSource for FakeSchemaSource {
        async fn latest_schema(&self, _topic: &str) -> Result<SchemaDocument, GatewayError> {
            Ok(SchemaDocument {
                definition: SCHEMA.to_string(),
                version: 1,
                id: None,
            })
        }
    }

    #[derive(Default)]
    struct RecordingPublisher {
        published: Mutex<Vec<(String, WireRecord)>>,
    }

    #[async_trait]
    impl RecordPublisher for RecordingPublisher {
        async fn ensure_topic(&self, _topic: &str) -> Result<(), reporting_kafka::BrokerError> {
            Ok(())
        }

        async fn publish_record(
            &self,
            topic: &str,
            record: &WireRecord,
            _schema: &SchemaDocument,
            _key: &str,
        ) -> Result<DeliveryOutcome, reporting_kafka::BrokerError> {
            self.published
                .lock()
                .unwrap()
                .push((topic.to_string(), record.clone()));
            Ok(DeliveryOutcome {
                success: true,
                partition: 0,
                offset: 1,
            })
        }
    }

    fn sample_event() -> EntityEvent {
        EntityEvent {
            id: Uuid::new_v4(),
            event_type: "ContactDetailAddedEvent".to_string(),
            source_domain: "ContactDetails".to_string(),
            source_system: "ContactDetailsAPI".to_string(),
            version: "v1".to_string(),
            correlation_id: Uuid::new_v4(),
            date_time: Utc.with_ymd_and_hms(2023, 2, 1, 9, 30, 0).unwrap(),
            entity_id: Uuid::new_v4(),
            user: None,
        }
    }

    #[tokio::test]
    async fn publishes_the_enveloped_contact_details_record() {
        let event = sample_event();
        let details: ContactDetails = serde_json::from_str(&format!(
            r#"{{
                "id": "{}",
                "targetId": "{}",
                "recordValidUntil": "1970-01-02T00:00:00Z"
            }}"#,
            event.entity_id,
            Uuid::new_v4()
        ))
        .unwrap();

        let publisher = Arc::new(RecordingPublisher::default());
        let use_case = ContactDetailsUseCase::new(
            Arc::new(FakeContactDetailsApi {
                details: Some(details),
            }),
            Arc::new(FakeSchemaSource),
            publisher.clone(),
            "reporting.contact-details",
        );

        use_case.process_message(&event).await.unwrap();

        let published = publisher.published.lock().unwrap();
        let (topic, record) = &published[0];
        assert_eq!(topic, "reporting.contact-details");

        let Some(WireValue::Record(payload)) = record.get("ContactDetails") else {
            panic!("expected the contact details payload record");
        };
        assert_eq!(
            payload.get("RecordValidUntil"),
            Some(&WireValue::Int(86_400))
        );
    }

    #[tokio::test]
    async fn missing_contact_details_are_fatal() {
        let event = sample_event();
        let use_case = ContactDetailsUseCase::new(
            Arc::new(FakeContactDetailsApi { details: None }),
            Arc::new(FakeSchemaSource),
            Arc::new(RecordingPublisher::default()),
            "reporting.contact-details",
        );

        let err = use_case.process_message(&event).await.unwrap_err();
        assert!(matches!(err, ListenerError::NotFound { .. }));
    }
}
