//! Schema model.
//!
//! Parses the JSON schema document fetched from the schema catalog into an
//! in-memory descriptor the record builder can walk. Parsing is a pure
//! function of the document: the resulting tree is immutable and owned by
//! the conversion that requested it.

use serde_json::Value as Json;

use crate::error::SchemaParseError;

/// Primitive wire types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    String,
    Boolean,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveType {
    /// The type name as it appears in schema documents.
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveType::String => "string",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }

    fn from_name(name: &str) -> Option<PrimitiveType> {
        match name {
            "string" => Some(PrimitiveType::String),
            "boolean" => Some(PrimitiveType::Boolean),
            "int" => Some(PrimitiveType::Int),
            "long" => Some(PrimitiveType::Long),
            "float" => Some(PrimitiveType::Float),
            "double" => Some(PrimitiveType::Double),
            _ => None,
        }
    }
}

/// A named field within a record schema. Field order is preserved from the
/// document; values are matched by name, but output mirrors this order.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField {
    pub name: String,
    pub schema: SchemaNode,
}

/// An enumeration schema: a name and its ordered symbol list.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumSchema {
    pub name: String,
    pub symbols: Vec<String>,
}

/// A record schema: a name and its ordered field list.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    pub name: String,
    pub fields: Vec<SchemaField>,
}

/// Recursive descriptor of one schema fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Null,
    Primitive(PrimitiveType),
    Enum(EnumSchema),
    Record(RecordSchema),
    Array(Box<SchemaNode>),
    Union(Vec<SchemaNode>),
}

impl SchemaNode {
    /// Parse a schema document into its descriptor.
    pub fn parse(document: &str) -> Result<SchemaNode, SchemaParseError> {
        let json: Json = serde_json::from_str(document)?;
        SchemaNode::from_json(&json)
    }

    fn from_json(json: &Json) -> Result<SchemaNode, SchemaParseError> {
        match json {
            Json::String(name) => SchemaNode::from_name(name),
            // A list denotes a union, conventionally [T, "null"] in either order.
            Json::Array(members) => {
                let members = members
                    .iter()
                    .map(SchemaNode::from_json)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(SchemaNode::Union(members))
            }
            Json::Object(attrs) => {
                let type_attr = attrs.get("type").ok_or(SchemaParseError::MissingAttribute {
                    kind: "object",
                    attribute: "type",
                })?;
                match type_attr {
                    Json::String(name) => match name.as_str() {
                        "record" => SchemaNode::record_from_attrs(attrs),
                        "enum" => SchemaNode::enum_from_attrs(attrs),
                        "array" => {
                            let items =
                                attrs.get("items").ok_or(SchemaParseError::MissingAttribute {
                                    kind: "array",
                                    attribute: "items",
                                })?;
                            Ok(SchemaNode::Array(Box::new(SchemaNode::from_json(items)?)))
                        }
                        // A primitive with annotations, e.g. {"type": "int",
                        // "logicalType": "date"}. The annotation is tolerated
                        // and ignored: dispatch is driven by the runtime value.
                        other => SchemaNode::from_name(other),
                    },
                    // A nested schema wrapped in an object, e.g.
                    // {"type": ["null", "int"]} or {"type": {"type": "record", ...}}.
                    nested => SchemaNode::from_json(nested),
                }
            }
            other => Err(SchemaParseError::Malformed(format!(
                "expected a type name, union list or schema object, found {other}"
            ))),
        }
    }

    fn from_name(name: &str) -> Result<SchemaNode, SchemaParseError> {
        if name == "null" {
            return Ok(SchemaNode::Null);
        }
        PrimitiveType::from_name(name)
            .map(SchemaNode::Primitive)
            .ok_or_else(|| SchemaParseError::UnknownType(name.to_string()))
    }

    fn record_from_attrs(
        attrs: &serde_json::Map<String, Json>,
    ) -> Result<SchemaNode, SchemaParseError> {
        let name = attrs
            .get("name")
            .and_then(Json::as_str)
            .ok_or(SchemaParseError::MissingAttribute {
                kind: "record",
                attribute: "name",
            })?
            .to_string();
        let fields = attrs
            .get("fields")
            .and_then(Json::as_array)
            .ok_or(SchemaParseError::MissingAttribute {
                kind: "record",
                attribute: "fields",
            })?;

        let fields = fields
            .iter()
            .map(|field| {
                let attrs = field.as_object().ok_or_else(|| {
                    SchemaParseError::Malformed(format!("record field is not an object: {field}"))
                })?;
                let name = attrs
                    .get("name")
                    .and_then(Json::as_str)
                    .ok_or(SchemaParseError::MissingAttribute {
                        kind: "field",
                        attribute: "name",
                    })?
                    .to_string();
                let schema_json =
                    attrs.get("type").ok_or(SchemaParseError::MissingAttribute {
                        kind: "field",
                        attribute: "type",
                    })?;
                Ok(SchemaField {
                    name,
                    schema: SchemaNode::from_json(schema_json)?,
                })
            })
            .collect::<Result<Vec<_>, SchemaParseError>>()?;

        Ok(SchemaNode::Record(RecordSchema { name, fields }))
    }

    fn enum_from_attrs(
        attrs: &serde_json::Map<String, Json>,
    ) -> Result<SchemaNode, SchemaParseError> {
        let name = attrs
            .get("name")
            .and_then(Json::as_str)
            .ok_or(SchemaParseError::MissingAttribute {
                kind: "enum",
                attribute: "name",
            })?
            .to_string();
        let symbols = attrs
            .get("symbols")
            .and_then(Json::as_array)
            .ok_or(SchemaParseError::MissingAttribute {
                kind: "enum",
                attribute: "symbols",
            })?
            .iter()
            .map(|symbol| {
                symbol.as_str().map(str::to_string).ok_or_else(|| {
                    SchemaParseError::Malformed(format!("enum symbol is not a string: {symbol}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SchemaNode::Enum(EnumSchema { name, symbols }))
    }

    /// The descriptor kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            SchemaNode::Null => "null",
            SchemaNode::Primitive(p) => p.name(),
            SchemaNode::Enum(_) => "enum",
            SchemaNode::Record(_) => "record",
            SchemaNode::Array(_) => "array",
            SchemaNode::Union(_) => "union",
        }
    }

    /// For a union: the first member that is not null. This is the member
    /// whose kind drives coercion once optionality is resolved.
    pub fn non_null_member(&self) -> Option<&SchemaNode> {
        match self {
            SchemaNode::Union(members) => {
                members.iter().find(|m| !matches!(m, SchemaNode::Null))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_primitive_names() {
        for (name, expected) in [
            ("string", PrimitiveType::String),
            ("boolean", PrimitiveType::Boolean),
            ("int", PrimitiveType::Int),
            ("long", PrimitiveType::Long),
            ("float", PrimitiveType::Float),
            ("double", PrimitiveType::Double),
        ] {
            let node = SchemaNode::parse(&format!("\"{name}\"")).unwrap();
            assert_eq!(node, SchemaNode::Primitive(expected));
        }
    }

    #[test]
    fn parses_nullable_union_in_either_order() {
        let node = SchemaNode::parse(r#"["null", "int"]"#).unwrap();
        assert_eq!(
            node.non_null_member(),
            Some(&SchemaNode::Primitive(PrimitiveType::Int))
        );

        let node = SchemaNode::parse(r#"["string", "null"]"#).unwrap();
        assert_eq!(
            node.non_null_member(),
            Some(&SchemaNode::Primitive(PrimitiveType::String))
        );
    }

    #[test]
    fn parses_record_with_ordered_fields() {
        let node = SchemaNode::parse(
            r#"{
                "type": "record",
                "name": "Person",
                "namespace": "example",
                "fields": [
                    {"name": "Id", "type": "string"},
                    {"name": "Age", "type": ["null", "int"]}
                ]
            }"#,
        )
        .unwrap();

        let SchemaNode::Record(record) = node else {
            panic!("expected record schema");
        };
        assert_eq!(record.name, "Person");
        assert_eq!(record.fields[0].name, "Id");
        assert_eq!(record.fields[1].name, "Age");
    }

    #[test]
    fn parses_enum_with_symbols() {
        let node = SchemaNode::parse(
            r#"{"type": "enum", "name": "MemberType", "symbols": ["Person", "Organisation"]}"#,
        )
        .unwrap();
        assert_eq!(
            node,
            SchemaNode::Enum(EnumSchema {
                name: "MemberType".to_string(),
                symbols: vec!["Person".to_string(), "Organisation".to_string()],
            })
        );
    }

    #[test]
    fn parses_array_of_records() {
        let node = SchemaNode::parse(
            r#"{
                "type": "array",
                "items": {
                    "type": "record",
                    "name": "Member",
                    "fields": [{"name": "Id", "type": "string"}]
                }
            }"#,
        )
        .unwrap();
        let SchemaNode::Array(items) = node else {
            panic!("expected array schema");
        };
        assert!(matches!(*items, SchemaNode::Record(_)));
    }

    #[test]
    fn tolerates_logical_type_annotations() {
        let node =
            SchemaNode::parse(r#"{"type": "int", "logicalType": "date"}"#).unwrap();
        assert_eq!(node, SchemaNode::Primitive(PrimitiveType::Int));
    }

    #[test]
    fn parses_type_attribute_holding_a_nested_schema() {
        let node = SchemaNode::parse(r#"{"type": ["null", "boolean"]}"#).unwrap();
        assert_eq!(
            node.non_null_member(),
            Some(&SchemaNode::Primitive(PrimitiveType::Boolean))
        );
    }

    #[test]
    fn rejects_unknown_type_names() {
        let err = SchemaNode::parse(r#""decimal128""#).unwrap_err();
        assert!(matches!(err, SchemaParseError::UnknownType(name) if name == "decimal128"));
    }

    #[test]
    fn rejects_record_without_fields() {
        let err = SchemaNode::parse(r#"{"type": "record", "name": "Empty"}"#).unwrap_err();
        assert!(matches!(
            err,
            SchemaParseError::MissingAttribute { kind: "record", attribute: "fields" }
        ));
    }

    #[test]
    fn rejects_documents_that_are_not_json() {
        assert!(matches!(
            SchemaNode::parse("not json").unwrap_err(),
            SchemaParseError::Json(_)
        ));
    }
}
