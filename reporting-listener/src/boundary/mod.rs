//! Inbound message boundary.
//!
//! The change notification delivered by the hosting queue. Field names on
//! the wire are PascalCase, matching the producing domain APIs.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// Event types with a registered processor.
pub mod event_types {
    pub const TENURE_CREATED: &str = "TenureCreatedEvent";
    pub const TENURE_UPDATED: &str = "TenureUpdatedEvent";
    pub const CONTACT_DETAIL_ADDED: &str = "ContactDetailAddedEvent";
    pub const CONTACT_DETAIL_UPDATED: &str = "ContactDetailUpdatedEvent";
}

/// An entity-change notification.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntityEvent {
    pub id: Uuid,
    pub event_type: String,
    pub source_domain: String,
    pub source_system: String,
    pub version: String,
    pub correlation_id: Uuid,
    pub date_time: DateTime<Utc>,
    pub entity_id: Uuid,
    #[serde(default)]
    pub user: Option<UserDetails>,
}

/// The user whose action produced the change.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
