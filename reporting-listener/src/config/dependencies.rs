//! Dependency initialization and wiring for the listener.

use std::sync::Arc;

use tracing::info;

use reporting_kafka::{ProducerSettings, TopicSettings};

use crate::config::Settings;
use crate::consumer::NotificationConsumer;
use crate::errors::ListenerError;
use crate::gateway::{
    ApiClient, BrokerGateway, ContactDetailsApiGateway, SchemaRegistryGateway, TenureApiGateway,
};
use crate::listener::{Dispatcher, Listener};
use crate::use_case::{ContactDetailsUseCase, TenureUseCase, UseCaseRegistry};

/// Client id reported to the broker.
const CLIENT_ID: &str = "reporting-data-listener";

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured listener ready to run.
    pub listener: Listener,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    pub fn new() -> Result<Self, ListenerError> {
        let settings = Settings::from_env()?;

        info!(
            kafka_broker = %settings.kafka_broker,
            kafka_group_id = %settings.kafka_group_id,
            notifications_topic = %settings.notifications_topic,
            tenure_topic = %settings.tenure_topic,
            contact_details_topic = %settings.contact_details_topic,
            schema_registry_url = %settings.schema_registry_url,
            "initializing dependencies"
        );

        let producer_settings = ProducerSettings::from_env(&settings.kafka_broker, CLIENT_ID);
        let broker = Arc::new(
            BrokerGateway::new(
                &producer_settings,
                TopicSettings {
                    partitions: settings.topic_partitions,
                    replication: settings.topic_replication,
                },
            )
            .map_err(|e| ListenerError::config(format!("failed to create broker clients: {e}")))?,
        );

        let schemas = Arc::new(SchemaRegistryGateway::new(
            settings.schema_registry_url.clone(),
        ));

        let tenure_api = Arc::new(TenureApiGateway::new(ApiClient::new(
            settings.tenure_api_url.clone(),
            settings.tenure_api_token.clone(),
        )));
        let contact_details_api = Arc::new(ContactDetailsApiGateway::new(ApiClient::new(
            settings.contact_details_api_url.clone(),
            settings.contact_details_api_token.clone(),
        )));

        let registry = UseCaseRegistry::new(
            TenureUseCase::new(
                tenure_api,
                schemas.clone(),
                broker.clone(),
                settings.tenure_topic.clone(),
            ),
            ContactDetailsUseCase::new(
                contact_details_api,
                schemas,
                broker,
                settings.contact_details_topic.clone(),
            ),
        );

        let consumer = NotificationConsumer::new(
            &settings.kafka_broker,
            &settings.kafka_group_id,
            settings.notifications_topic.clone(),
        )?;

        info!("dependencies initialized");

        Ok(Self {
            listener: Listener::new(consumer, Dispatcher::new(registry)),
        })
    }
}
