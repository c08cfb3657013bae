//! End-to-end conversion scenarios over realistic registry schemas.

use avro_record::{build_record, ObjectBuilder, SchemaNode, SourceValue, WireValue};
use chrono::{TimeZone, Utc};
use uuid::Uuid;

#[test]
fn string_id_and_nullable_date_field() {
    let schema = SchemaNode::parse(
        r#"{
            "type": "record",
            "name": "ExampleRecord",
            "fields": [
                {"name": "Id", "type": "string", "logicalType": "uuid"},
                {"name": "RecordValidUntil", "type": ["null", "int"]}
            ]
        }"#,
    )
    .unwrap();

    let id = Uuid::new_v4();
    let valid_until = Utc.with_ymd_and_hms(1970, 1, 2, 0, 0, 0).unwrap();
    let source = ObjectBuilder::new()
        .field("Id", &id)
        .field("RecordValidUntil", &valid_until)
        .build();

    let record = build_record(&source, &schema).unwrap();
    assert_eq!(record.get("Id"), Some(&WireValue::String(id.to_string())));
    assert_eq!(record.get("RecordValidUntil"), Some(&WireValue::Int(86_400)));
}

#[test]
fn schema_fields_the_entity_does_not_carry_are_simply_absent() {
    let schema = SchemaNode::parse(
        r#"{
            "type": "record",
            "name": "ExampleRecord",
            "fields": [
                {"name": "Id", "type": "string"},
                {"name": "FieldNameNotInEntity", "type": "string"}
            ]
        }"#,
    )
    .unwrap();

    let source = ObjectBuilder::new().field("Id", "some-id").build();

    let record = build_record(&source, &schema).unwrap();
    assert!(record.contains("Id"));
    assert!(!record.contains("FieldNameNotInEntity"));
    assert_eq!(record.fields.len(), 1);
}

#[test]
fn nested_array_of_typed_members_with_enum_symbols() {
    let schema = SchemaNode::parse(
        r#"{
            "type": "record",
            "name": "TenureInformation",
            "fields": [
                {"name": "HouseholdMembers", "type": {
                    "type": "array",
                    "items": {
                        "type": "record",
                        "name": "HouseholdMember",
                        "fields": [
                            {"name": "Id", "type": "string"},
                            {"name": "Type", "type": {
                                "type": "enum",
                                "name": "HouseholdMembersType",
                                "symbols": ["Person", "Organisation"]
                            }}
                        ]
                    }
                }}
            ]
        }"#,
    )
    .unwrap();

    let member_id = Uuid::new_v4();
    let members = vec![ObjectBuilder::new()
        .field("Id", &member_id)
        .field("Type", "Person")
        .build()];
    let source = ObjectBuilder::new()
        .field("HouseholdMembers", &members)
        .build();

    let record = build_record(&source, &schema).unwrap();
    let Some(WireValue::Array(items)) = record.get("HouseholdMembers") else {
        panic!("expected an array of members");
    };
    assert_eq!(items.len(), 1);

    let WireValue::Record(member) = &items[0] else {
        panic!("expected a member record");
    };
    assert_eq!(
        member.get("Id"),
        Some(&WireValue::String(member_id.to_string()))
    );
    let Some(WireValue::Enum(symbol)) = member.get("Type") else {
        panic!("expected a symbolic enum value");
    };
    assert_eq!(symbol.symbol, "Person");
    assert_eq!(symbol.enum_name, "HouseholdMembersType");
    assert_eq!(symbol.position, 0);
}

#[test]
fn null_optional_dates_emit_null_not_omission() {
    let schema = SchemaNode::parse(
        r#"{
            "type": "record",
            "name": "ExampleRecord",
            "fields": [
                {"name": "Id", "type": "string"},
                {"name": "EndDate", "type": ["null", "int"]}
            ]
        }"#,
    )
    .unwrap();

    let source = ObjectBuilder::new()
        .field("Id", "x")
        .field("EndDate", &SourceValue::Null)
        .build();

    let record = build_record(&source, &schema).unwrap();
    assert_eq!(record.get("EndDate"), Some(&WireValue::Null));
}

#[test]
fn booleans_and_numbers_pass_through_matching_targets() {
    let schema = SchemaNode::parse(
        r#"{
            "type": "record",
            "name": "Mixed",
            "fields": [
                {"name": "Bool", "type": "boolean"},
                {"name": "NullableBool", "type": ["boolean", "null"]},
                {"name": "Count", "type": "long"},
                {"name": "Rent", "type": ["null", "double"]}
            ]
        }"#,
    )
    .unwrap();

    let source = ObjectBuilder::new()
        .field("Bool", &true)
        .field("NullableBool", &Some(false))
        .field("Count", &9_000_000_000i64)
        .field("Rent", &101.50f64)
        .build();

    let record = build_record(&source, &schema).unwrap();
    assert_eq!(record.get("Bool"), Some(&WireValue::Boolean(true)));
    assert_eq!(record.get("NullableBool"), Some(&WireValue::Boolean(false)));
    assert_eq!(record.get("Count"), Some(&WireValue::Long(9_000_000_000)));
    assert_eq!(record.get("Rent"), Some(&WireValue::Double(101.50)));
}
