//! Avro binary codec.
//!
//! Serializes a built [`WireRecord`] against the schema definition it was
//! built from. The registry serves schemas as JSON strings; the codec
//! re-parses the definition with the serializer's own parser so the bytes
//! on the wire are exactly what downstream Avro consumers expect.
//!
//! `encode_confluent` additionally frames the datum in the Confluent wire
//! format - magic byte `0x00` followed by the big-endian schema id - for
//! clusters whose consumers resolve schemas by registry id.

use apache_avro::types::Value;
use apache_avro::{to_avro_datum, Schema};

use avro_record::{EnumSymbol, WireRecord, WireValue};

use crate::error::CodecError;

/// Serialize a record to its Avro binary datum.
pub fn encode(record: &WireRecord, schema_definition: &str) -> Result<Vec<u8>, CodecError> {
    let schema =
        Schema::parse_str(schema_definition).map_err(|e| CodecError::Schema(e.to_string()))?;
    // Resolve before encoding: the builder emits bare values for union
    // fields, and resolution picks the union branch for them.
    let value = record_value(record)
        .resolve(&schema)
        .map_err(|e| CodecError::Encode(e.to_string()))?;
    to_avro_datum(&schema, value).map_err(|e| CodecError::Encode(e.to_string()))
}

/// Serialize a record and frame it in the Confluent wire format.
pub fn encode_confluent(
    record: &WireRecord,
    schema_definition: &str,
    schema_id: i32,
) -> Result<Vec<u8>, CodecError> {
    let datum = encode(record, schema_definition)?;
    let mut framed = Vec::with_capacity(datum.len() + 5);
    framed.push(0u8);
    framed.extend_from_slice(&schema_id.to_be_bytes());
    framed.extend_from_slice(&datum);
    Ok(framed)
}

fn record_value(record: &WireRecord) -> Value {
    Value::Record(
        record
            .fields
            .iter()
            .map(|(name, value)| (name.clone(), wire_value(value)))
            .collect(),
    )
}

fn wire_value(value: &WireValue) -> Value {
    match value {
        WireValue::Null => Value::Null,
        WireValue::Boolean(b) => Value::Boolean(*b),
        WireValue::Int(i) => Value::Int(*i),
        WireValue::Long(l) => Value::Long(*l),
        WireValue::Float(f) => Value::Float(*f),
        WireValue::Double(d) => Value::Double(*d),
        WireValue::String(s) => Value::String(s.clone()),
        WireValue::Enum(EnumSymbol {
            position, symbol, ..
        }) => Value::Enum(*position, symbol.clone()),
        WireValue::Record(nested) => record_value(nested),
        WireValue::Array(items) => Value::Array(items.iter().map(wire_value).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apache_avro::from_avro_datum;
    use avro_record::{build_record, ObjectBuilder, SchemaNode};

    const SCHEMA: &str = r#"{
        "type": "record",
        "name": "ExampleRecord",
        "fields": [
            {"name": "Id", "type": "string"},
            {"name": "Count", "type": ["null", "long"]}
        ]
    }"#;

    #[test]
    fn encoded_records_decode_under_the_same_schema() {
        let source = ObjectBuilder::new()
            .field("Id", "abc-123")
            .field("Count", &7i64)
            .build();
        let record = build_record(&source, &SchemaNode::parse(SCHEMA).unwrap()).unwrap();

        let datum = encode(&record, SCHEMA).unwrap();

        let schema = Schema::parse_str(SCHEMA).unwrap();
        let decoded = from_avro_datum(&schema, &mut datum.as_slice(), None).unwrap();
        let Value::Record(fields) = decoded else {
            panic!("expected a record");
        };
        assert_eq!(fields[0], ("Id".to_string(), Value::String("abc-123".to_string())));
        assert_eq!(
            fields[1],
            (
                "Count".to_string(),
                Value::Union(1, Box::new(Value::Long(7)))
            )
        );
    }

    #[test]
    fn confluent_framing_prefixes_magic_byte_and_schema_id() {
        let source = ObjectBuilder::new()
            .field("Id", "x")
            .field("Count", &1i64)
            .build();
        let record = build_record(&source, &SchemaNode::parse(SCHEMA).unwrap()).unwrap();

        let framed = encode_confluent(&record, SCHEMA, 42).unwrap();
        assert_eq!(framed[0], 0);
        assert_eq!(&framed[1..5], &42i32.to_be_bytes());

        let datum = encode(&record, SCHEMA).unwrap();
        assert_eq!(&framed[5..], datum.as_slice());
    }

    #[test]
    fn malformed_schema_definitions_are_rejected() {
        let record = WireRecord {
            name: "X".to_string(),
            fields: vec![],
        };
        let err = encode(&record, "{\"type\": \"nonsense\"}").unwrap_err();
        assert!(matches!(err, CodecError::Schema(_)));
    }
}
