//! Gateways to the listener's external collaborators: the upstream entity
//! APIs, the schema registry and the message broker.

pub mod api_client;
pub mod broker;
pub mod contact_details_api;
pub mod schema_registry;
pub mod tenure_api;

pub use api_client::ApiClient;
pub use broker::{BrokerGateway, DeliveryOutcome, RecordPublisher};
pub use contact_details_api::{ContactDetailsApi, ContactDetailsApiGateway};
pub use schema_registry::{SchemaDocument, SchemaRegistryGateway, SchemaSource};
pub use tenure_api::{TenureApi, TenureApiGateway};
