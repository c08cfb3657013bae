//! The outer envelope wrapped around every published entity record.
//!
//! Every reporting message shares the same outer shape - event metadata,
//! the acting user, and a single payload field holding the fetched entity.
//! Only the payload field's name varies per entity kind, so it is an input
//! rather than a fixed member.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use avro_record::{ObjectBuilder, SourceValue, ToSource};

use crate::boundary::EntityEvent;

/// The user whose action produced the change, as carried on the envelope.
#[derive(Debug, Clone, Default)]
pub struct ActingUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl ToSource for ActingUser {
    fn to_source(&self) -> SourceValue {
        ObjectBuilder::new()
            .field("Name", &self.name)
            .field("Email", &self.email)
            .build()
    }
}

/// The fixed outer shape of a published reporting message.
#[derive(Debug, Clone)]
pub struct ChangeEnvelope {
    pub id: Uuid,
    pub event_type: String,
    pub source_domain: String,
    pub source_system: String,
    pub version: String,
    pub correlation_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub user: ActingUser,
    payload_name: String,
    payload: SourceValue,
}

impl ChangeEnvelope {
    /// Wrap a fetched entity under `payload_name`, carrying over the
    /// notification's metadata. Pure construction.
    pub fn wrap(payload_name: &str, payload: SourceValue, event: &EntityEvent) -> Self {
        Self {
            id: event.id,
            event_type: event.event_type.clone(),
            source_domain: event.source_domain.clone(),
            source_system: event.source_system.clone(),
            version: event.version.clone(),
            correlation_id: event.correlation_id,
            timestamp: event.date_time,
            user: ActingUser {
                name: event.user.as_ref().and_then(|u| u.name.clone()),
                email: event.user.as_ref().and_then(|u| u.email.clone()),
            },
            payload_name: payload_name.to_string(),
            payload,
        }
    }
}

impl ToSource for ChangeEnvelope {
    fn to_source(&self) -> SourceValue {
        ObjectBuilder::new()
            .field("Id", &self.id)
            .field("EventType", &self.event_type)
            .field("SourceDomain", &self.source_domain)
            .field("SourceSystem", &self.source_system)
            .field("Version", &self.version)
            .field("CorrelationId", &self.correlation_id)
            .field("DateTime", &self.timestamp)
            .field("User", &self.user)
            .field(&self.payload_name, &self.payload)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::UserDetails;
    use chrono::TimeZone;

    fn sample_event() -> EntityEvent {
        EntityEvent {
            id: Uuid::new_v4(),
            event_type: "TenureUpdatedEvent".to_string(),
            source_domain: "Tenure".to_string(),
            source_system: "TenureAPI".to_string(),
            version: "v1".to_string(),
            correlation_id: Uuid::new_v4(),
            date_time: Utc.with_ymd_and_hms(2023, 2, 1, 9, 30, 0).unwrap(),
            entity_id: Uuid::new_v4(),
            user: Some(UserDetails {
                name: Some("Test User".to_string()),
                email: Some("test@example.org".to_string()),
            }),
        }
    }

    #[test]
    fn renders_the_fixed_shape_with_the_named_payload_last() {
        let event = sample_event();
        let payload = ObjectBuilder::new().field("Id", "entity-id").build();
        let envelope = ChangeEnvelope::wrap("Tenure", payload, &event);

        let SourceValue::Object(fields) = envelope.to_source() else {
            panic!("expected an object");
        };
        let names: Vec<_> = fields.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Id",
                "EventType",
                "SourceDomain",
                "SourceSystem",
                "Version",
                "CorrelationId",
                "DateTime",
                "User",
                "Tenure"
            ]
        );
    }

    #[test]
    fn timestamp_stays_a_date_value() {
        let event = sample_event();
        let envelope =
            ChangeEnvelope::wrap("Tenure", ObjectBuilder::new().build(), &event);
        let rendered = envelope.to_source();
        assert_eq!(
            rendered.field("DateTime"),
            Some(&SourceValue::DateTime(event.date_time))
        );
    }

    #[test]
    fn missing_user_renders_null_members() {
        let mut event = sample_event();
        event.user = None;
        let envelope =
            ChangeEnvelope::wrap("ContactDetails", ObjectBuilder::new().build(), &event);
        let rendered = envelope.to_source();
        let user = rendered.field("User").unwrap();
        assert_eq!(user.field("Name"), Some(&SourceValue::Null));
        assert_eq!(user.field("Email"), Some(&SourceValue::Null));
    }
}
