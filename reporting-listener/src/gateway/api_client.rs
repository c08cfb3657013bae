//! Shared HTTP client for the upstream entity APIs.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

use crate::errors::GatewayError;

/// Correlation id header propagated on every upstream call.
const CORRELATION_HEADER: &str = "x-correlation-id";

/// A JSON API client bound to one upstream service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for the service at `base_url`. The optional token
    /// is sent as the `Authorization` header value on every request.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    /// GET a JSON resource.
    ///
    /// A 404 answer maps to `Ok(None)` - "not found" is an expected
    /// outcome the caller decides how to treat. Every other non-success
    /// status is a gateway error.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        route: &str,
        correlation_id: Uuid,
    ) -> Result<Option<T>, GatewayError> {
        let url = format!("{}/{}", self.base_url, route.trim_start_matches('/'));
        debug!(%url, %correlation_id, "fetching upstream resource");

        let mut request = self
            .http
            .get(&url)
            .header(CORRELATION_HEADER, correlation_id.to_string());
        if let Some(token) = &self.token {
            request = request.header(reqwest::header::AUTHORIZATION, token.clone());
        }

        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Http(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(GatewayError::Status {
                url,
                status: response.status().as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map(Some)
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }
}
