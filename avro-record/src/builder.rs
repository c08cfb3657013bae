//! Record builder.
//!
//! Walks a record schema's field list in order, resolves each field from
//! the source object by name, coerces the value and recurses into nested
//! records and arrays. The dispatch order is part of the contract:
//! string and enum targets win over everything else, and a runtime date
//! value short-circuits array/record handling whatever the declared kind
//! says.

use tracing::debug;

use crate::coerce;
use crate::error::BuildError;
use crate::schema::{PrimitiveType, RecordSchema, SchemaNode};
use crate::source::SourceValue;
use crate::wire::{WireRecord, WireValue};

/// Build a schema-conformant record from a source object.
///
/// Fields declared by the schema but absent from the source are logged
/// and skipped; a resolved value that cannot be coerced to its declared
/// type is fatal for the whole record.
pub fn build_record(source: &SourceValue, schema: &SchemaNode) -> Result<WireRecord, BuildError> {
    match schema {
        SchemaNode::Record(record) => build_fields(source, record),
        other => Err(BuildError::NotARecord { kind: other.kind() }),
    }
}

fn build_fields(source: &SourceValue, schema: &RecordSchema) -> Result<WireRecord, BuildError> {
    if !matches!(source, SourceValue::Object(_)) {
        return Err(BuildError::SourceNotObject {
            record: schema.name.clone(),
            actual: source.type_name(),
        });
    }

    let mut fields = Vec::with_capacity(schema.fields.len());
    for field in &schema.fields {
        let Some(value) = source.field(&field.name) else {
            debug!(
                field = %field.name,
                record = %schema.name,
                "field not present in source object, skipping"
            );
            continue;
        };

        // Resolve optionality first: a null under a union is written as an
        // explicit null marker, otherwise the union's non-null member
        // drives coercion.
        let effective = match &field.schema {
            SchemaNode::Union(_) => {
                if value.is_null() {
                    fields.push((field.name.clone(), WireValue::Null));
                    continue;
                }
                field.schema.non_null_member().ok_or_else(|| {
                    BuildError::UnsupportedSchema {
                        field: field.name.clone(),
                        kind: "all-null union",
                    }
                })?
            }
            declared => declared,
        };

        let wire = convert_field(&field.name, value, effective)?;
        fields.push((field.name.clone(), wire));
    }

    Ok(WireRecord {
        name: schema.name.clone(),
        fields,
    })
}

fn convert_field(
    name: &str,
    value: &SourceValue,
    effective: &SchemaNode,
) -> Result<WireValue, BuildError> {
    // A runtime date value short-circuits array/record handling; only
    // string and enum targets still take precedence over it.
    if let SourceValue::DateTime(date) = value {
        return match effective {
            SchemaNode::Primitive(PrimitiveType::String) => coerce::string(name, value),
            SchemaNode::Enum(schema) => coerce::enum_symbol(name, value, schema),
            _ => coerce::date(name, date),
        };
    }

    match effective {
        SchemaNode::Primitive(PrimitiveType::String) => coerce::string(name, value),
        SchemaNode::Enum(schema) => coerce::enum_symbol(name, value, schema),
        SchemaNode::Array(items) => {
            let SchemaNode::Record(item_schema) = items.as_ref() else {
                return Err(BuildError::NonRecordArrayItems {
                    field: name.to_string(),
                });
            };
            let SourceValue::List(elements) = value else {
                return Err(BuildError::Coercion {
                    field: name.to_string(),
                    expected: "array".to_string(),
                    actual: value.type_name(),
                });
            };
            let records = elements
                .iter()
                .map(|element| build_fields(element, item_schema).map(WireValue::Record))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(WireValue::Array(records))
        }
        SchemaNode::Record(record) => build_fields(value, record).map(WireValue::Record),
        SchemaNode::Primitive(primitive) => coerce::primitive(name, value, *primitive),
        SchemaNode::Null => {
            if value.is_null() {
                Ok(WireValue::Null)
            } else {
                Err(BuildError::Coercion {
                    field: name.to_string(),
                    expected: "null".to_string(),
                    actual: value.type_name(),
                })
            }
        }
        SchemaNode::Union(_) => Err(BuildError::UnsupportedSchema {
            field: name.to_string(),
            kind: "nested union",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ObjectBuilder;
    use chrono::{TimeZone, Utc};

    fn person_schema() -> SchemaNode {
        SchemaNode::parse(
            r#"{
                "type": "record",
                "name": "Person",
                "fields": [
                    {"name": "Id", "type": "string"},
                    {"name": "Age", "type": ["null", "int"]},
                    {"name": "Active", "type": "boolean"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn builds_fields_in_schema_order() {
        let source = ObjectBuilder::new()
            .field("Active", &true)
            .field("Id", "p-1")
            .field("Age", &41i64)
            .build();

        let record = build_record(&source, &person_schema()).unwrap();
        let names: Vec<_> = record.field_names().collect();
        assert_eq!(names, vec!["Id", "Age", "Active"]);
    }

    #[test]
    fn absent_fields_are_skipped_without_error() {
        let source = ObjectBuilder::new().field("Id", "p-1").build();

        let record = build_record(&source, &person_schema()).unwrap();
        assert!(record.contains("Id"));
        assert!(!record.contains("Age"));
        assert!(!record.contains("Active"));
    }

    #[test]
    fn null_under_a_union_is_written_as_explicit_null() {
        let none: Option<i64> = None;
        let source = ObjectBuilder::new()
            .field("Id", "p-1")
            .field("Age", &none)
            .field("Active", &false)
            .build();

        let record = build_record(&source, &person_schema()).unwrap();
        assert_eq!(record.get("Age"), Some(&WireValue::Null));
    }

    #[test]
    fn runtime_dates_win_over_declared_int() {
        let schema = SchemaNode::parse(
            r#"{
                "type": "record",
                "name": "Dated",
                "fields": [{"name": "ValidUntil", "type": ["null", "int"]}]
            }"#,
        )
        .unwrap();
        let date = Utc.with_ymd_and_hms(1970, 1, 2, 0, 0, 0).unwrap();
        let source = ObjectBuilder::new().field("ValidUntil", &date).build();

        let record = build_record(&source, &schema).unwrap();
        assert_eq!(record.get("ValidUntil"), Some(&WireValue::Int(86_400)));
    }

    #[test]
    fn runtime_dates_stringify_when_the_schema_says_string() {
        let schema = SchemaNode::parse(
            r#"{
                "type": "record",
                "name": "Dated",
                "fields": [{"name": "CreatedAt", "type": "string"}]
            }"#,
        )
        .unwrap();
        let date = Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap();
        let source = ObjectBuilder::new().field("CreatedAt", &date).build();

        let record = build_record(&source, &schema).unwrap();
        assert_eq!(
            record.get("CreatedAt"),
            Some(&WireValue::String("2021-03-04T05:06:07Z".to_string()))
        );
    }

    #[test]
    fn nested_records_resolve_against_the_nested_object() {
        let schema = SchemaNode::parse(
            r#"{
                "type": "record",
                "name": "Outer",
                "fields": [
                    {"name": "Id", "type": "string"},
                    {"name": "Inner", "type": {
                        "type": "record",
                        "name": "Inner",
                        "fields": [{"name": "Id", "type": "string"}]
                    }}
                ]
            }"#,
        )
        .unwrap();

        let source = ObjectBuilder::new()
            .field("Id", "outer-id")
            .field("Inner", &ObjectBuilder::new().field("Id", "inner-id").build())
            .build();

        let record = build_record(&source, &schema).unwrap();
        let Some(WireValue::Record(inner)) = record.get("Inner") else {
            panic!("expected nested record");
        };
        assert_eq!(
            inner.get("Id"),
            Some(&WireValue::String("inner-id".to_string()))
        );
        assert_eq!(
            record.get("Id"),
            Some(&WireValue::String("outer-id".to_string()))
        );
    }

    #[test]
    fn arrays_build_one_record_per_element_in_source_order() {
        let schema = array_schema();
        let members = vec![
            ObjectBuilder::new().field("Id", "m-1").build(),
            ObjectBuilder::new().field("Id", "m-2").build(),
        ];
        let source = ObjectBuilder::new().field("Members", &members).build();

        let record = build_record(&source, &schema).unwrap();
        let Some(WireValue::Array(items)) = record.get("Members") else {
            panic!("expected array");
        };
        assert_eq!(items.len(), 2);
        let WireValue::Record(first) = &items[0] else {
            panic!("expected record item");
        };
        assert_eq!(first.get("Id"), Some(&WireValue::String("m-1".to_string())));
    }

    #[test]
    fn empty_source_collections_yield_empty_arrays() {
        let schema = array_schema();
        let members: Vec<SourceValue> = vec![];
        let source = ObjectBuilder::new().field("Members", &members).build();

        let record = build_record(&source, &schema).unwrap();
        assert_eq!(record.get("Members"), Some(&WireValue::Array(vec![])));
    }

    #[test]
    fn rebuilding_from_the_same_inputs_is_identical() {
        let source = ObjectBuilder::new()
            .field("Id", "p-1")
            .field("Age", &30i64)
            .field("Active", &true)
            .build();
        let schema = person_schema();

        let first = build_record(&source, &schema).unwrap();
        let second = build_record(&source, &schema).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn top_level_schema_must_be_a_record() {
        let schema = SchemaNode::parse(r#""string""#).unwrap();
        let source = ObjectBuilder::new().build();
        let err = build_record(&source, &schema).unwrap_err();
        assert!(matches!(err, BuildError::NotARecord { kind: "string" }));
    }

    #[test]
    fn coercion_failures_propagate() {
        let source = ObjectBuilder::new()
            .field("Id", "p-1")
            .field("Active", "yes")
            .build();
        let err = build_record(&source, &person_schema()).unwrap_err();
        assert!(matches!(err, BuildError::Coercion { field, .. } if field == "Active"));
    }

    fn array_schema() -> SchemaNode {
        SchemaNode::parse(
            r#"{
                "type": "record",
                "name": "Group",
                "fields": [
                    {"name": "Members", "type": {
                        "type": "array",
                        "items": {
                            "type": "record",
                            "name": "Member",
                            "fields": [{"name": "Id", "type": "string"}]
                        }
                    }}
                ]
            }"#,
        )
        .unwrap()
    }
}
