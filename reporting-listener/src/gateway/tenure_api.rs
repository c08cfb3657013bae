//! Tenure API gateway.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Tenure;
use crate::errors::GatewayError;
use crate::gateway::ApiClient;

/// Read access to the upstream tenure API.
#[async_trait]
pub trait TenureApi: Send + Sync {
    /// Fetch the current state of a tenure; `None` when absent upstream.
    async fn tenure_by_id(
        &self,
        id: Uuid,
        correlation_id: Uuid,
    ) -> Result<Option<Tenure>, GatewayError>;
}

pub struct TenureApiGateway {
    client: ApiClient,
}

impl TenureApiGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TenureApi for TenureApiGateway {
    async fn tenure_by_id(
        &self,
        id: Uuid,
        correlation_id: Uuid,
    ) -> Result<Option<Tenure>, GatewayError> {
        self.client
            .get_json(&format!("tenures/{id}"), correlation_id)
            .await
    }
}
