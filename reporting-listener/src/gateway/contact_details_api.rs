//! Contact details API gateway.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ContactDetails;
use crate::errors::GatewayError;
use crate::gateway::ApiClient;

/// Read access to the upstream contact details API.
#[async_trait]
pub trait ContactDetailsApi: Send + Sync {
    /// Fetch the contact details recorded against a target entity;
    /// `None` when absent upstream.
    async fn contact_details_by_target_id(
        &self,
        target_id: Uuid,
        correlation_id: Uuid,
    ) -> Result<Option<ContactDetails>, GatewayError>;
}

pub struct ContactDetailsApiGateway {
    client: ApiClient,
}

impl ContactDetailsApiGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContactDetailsApi for ContactDetailsApiGateway {
    async fn contact_details_by_target_id(
        &self,
        target_id: Uuid,
        correlation_id: Uuid,
    ) -> Result<Option<ContactDetails>, GatewayError> {
        self.client
            .get_json(&format!("contactDetails?targetId={target_id}"), correlation_id)
            .await
    }
}
