//! Broker gateway: topic administration plus acknowledged publish of
//! built records.

use async_trait::async_trait;
use rdkafka::admin::AdminClient;
use rdkafka::client::DefaultClientContext;
use rdkafka::producer::FutureProducer;
use tracing::info;

use avro_record::WireRecord;
use reporting_kafka::{codec, BrokerError, ProducerSettings, TopicSettings};

use crate::gateway::SchemaDocument;

/// The broker's acknowledgment result for one publish attempt.
#[derive(Debug, Clone, Copy)]
pub struct DeliveryOutcome {
    pub success: bool,
    pub partition: i32,
    pub offset: i64,
}

/// Publishes built records to the reporting topics.
#[async_trait]
pub trait RecordPublisher: Send + Sync {
    /// Create `topic` if the cluster does not already have it.
    async fn ensure_topic(&self, topic: &str) -> Result<(), BrokerError>;

    /// Serialize `record` against its schema and produce it, waiting for
    /// the broker acknowledgment.
    async fn publish_record(
        &self,
        topic: &str,
        record: &WireRecord,
        schema: &SchemaDocument,
        key: &str,
    ) -> Result<DeliveryOutcome, BrokerError>;
}

pub struct BrokerGateway {
    producer: FutureProducer,
    admin: AdminClient<DefaultClientContext>,
    topics: TopicSettings,
}

impl BrokerGateway {
    pub fn new(settings: &ProducerSettings, topics: TopicSettings) -> Result<Self, BrokerError> {
        Ok(Self {
            producer: reporting_kafka::create_producer(settings)?,
            admin: reporting_kafka::create_admin(settings)?,
            topics,
        })
    }
}

#[async_trait]
impl RecordPublisher for BrokerGateway {
    async fn ensure_topic(&self, topic: &str) -> Result<(), BrokerError> {
        reporting_kafka::ensure_topic(&self.admin, topic, &self.topics).await
    }

    async fn publish_record(
        &self,
        topic: &str,
        record: &WireRecord,
        schema: &SchemaDocument,
        key: &str,
    ) -> Result<DeliveryOutcome, BrokerError> {
        // Frame with the registry id when the registry supplied one, so
        // downstream consumers can resolve the schema themselves.
        let payload = match schema.id {
            Some(id) => codec::encode_confluent(record, &schema.definition, id)?,
            None => codec::encode(record, &schema.definition)?,
        };

        let delivery = reporting_kafka::publish(&self.producer, topic, key, &payload).await?;
        info!(
            topic,
            partition = delivery.partition,
            offset = delivery.offset,
            schema_version = schema.version,
            "produced reporting record"
        );

        Ok(DeliveryOutcome {
            success: true,
            partition: delivery.partition,
            offset: delivery.offset,
        })
    }
}
