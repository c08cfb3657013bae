//! The contact details entity served by the upstream contact API.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use avro_record::{ObjectBuilder, SourceValue, ToSource};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub id: Uuid,
    pub target_id: Uuid,
    #[serde(default)]
    pub target_type: Option<String>,
    #[serde(default)]
    pub contact_information: Option<ContactInformation>,
    #[serde(default)]
    pub source_service_area: Option<SourceServiceArea>,
    #[serde(default)]
    pub record_valid_until: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub created_by: Option<CreatedBy>,
}

impl ToSource for ContactDetails {
    fn to_source(&self) -> SourceValue {
        ObjectBuilder::new()
            .field("Id", &self.id)
            .field("TargetId", &self.target_id)
            .field("TargetType", &self.target_type)
            .field("ContactInformation", &self.contact_information)
            .field("SourceServiceArea", &self.source_service_area)
            .field("RecordValidUntil", &self.record_valid_until)
            .field("IsActive", &self.is_active)
            .field("CreatedBy", &self.created_by)
            .build()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInformation {
    #[serde(default)]
    pub contact_type: Option<String>,
    #[serde(default)]
    pub sub_type: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ToSource for ContactInformation {
    fn to_source(&self) -> SourceValue {
        ObjectBuilder::new()
            .field("ContactType", &self.contact_type)
            .field("SubType", &self.sub_type)
            .field("Value", &self.value)
            .field("Description", &self.description)
            .build()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceServiceArea {
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub is_default: Option<bool>,
}

impl ToSource for SourceServiceArea {
    fn to_source(&self) -> SourceValue {
        ObjectBuilder::new()
            .field("Area", &self.area)
            .field("IsDefault", &self.is_default)
            .build()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBy {
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
}

impl ToSource for CreatedBy {
    fn to_source(&self) -> SourceValue {
        ObjectBuilder::new()
            .field("CreatedAt", &self.created_at)
            .field("FullName", &self.full_name)
            .field("EmailAddress", &self.email_address)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_and_renders_the_valid_until_date() {
        let body = r#"{
            "id": "63a1a1cb-9b38-4d1b-a0c1-60f5e90b8f75",
            "targetId": "5b8f5e90-0c16-4d1b-9b38-63a1a1cb8f75",
            "targetType": "person",
            "contactInformation": {
                "contactType": "email",
                "value": "resident@example.org"
            },
            "recordValidUntil": "1970-01-02T00:00:00Z",
            "isActive": true
        }"#;

        let details: ContactDetails = serde_json::from_str(body).unwrap();
        let rendered = details.to_source();

        assert!(matches!(
            rendered.field("RecordValidUntil"),
            Some(SourceValue::DateTime(_))
        ));
        let info = rendered.field("ContactInformation").unwrap();
        assert_eq!(
            info.field("Value"),
            Some(&SourceValue::String("resident@example.org".to_string()))
        );
    }
}
