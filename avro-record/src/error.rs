//! Error types for schema parsing and record building.

use thiserror::Error;

/// Errors raised while parsing a schema document.
#[derive(Error, Debug)]
pub enum SchemaParseError {
    /// The document is not well-formed JSON.
    #[error("schema document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A type name outside the supported schema language.
    #[error("unknown schema type `{0}`")]
    UnknownType(String),

    /// A complex schema missing one of its required attributes.
    #[error("{kind} schema is missing required attribute `{attribute}`")]
    MissingAttribute {
        kind: &'static str,
        attribute: &'static str,
    },

    /// A schema fragment with an unexpected JSON shape.
    #[error("malformed schema fragment: {0}")]
    Malformed(String),
}

/// Fatal conversion errors.
///
/// A field present in both the source and the schema whose value cannot be
/// coerced is unrecoverable for the whole record; callers surface it for
/// the message rather than publishing a partial result. Absent fields are
/// not represented here at all; the builder skips them.
#[derive(Error, Debug)]
pub enum BuildError {
    /// The top-level schema handed to the builder was not a record.
    #[error("expected a record schema at the top level, found {kind}")]
    NotARecord { kind: &'static str },

    /// A record schema was applied to a value without fields.
    #[error("record `{record}` cannot be built from a {actual} value")]
    SourceNotObject {
        record: String,
        actual: &'static str,
    },

    /// The value's string form is not among the enum's declared symbols.
    #[error("symbol `{symbol}` is not declared by enum `{enum_name}`")]
    UnknownEnumSymbol { enum_name: String, symbol: String },

    /// The runtime value is fundamentally incompatible with the declared type.
    #[error("field `{field}`: cannot coerce {actual} value to {expected}")]
    Coercion {
        field: String,
        expected: String,
        actual: &'static str,
    },

    /// Array fields must declare record items.
    #[error("field `{field}`: array items must be records")]
    NonRecordArrayItems { field: String },

    /// A date outside the range a signed 32-bit epoch offset can carry.
    #[error("field `{field}`: timestamp does not fit a signed 32-bit epoch offset")]
    TimestampOutOfRange { field: String },

    /// A schema construct the builder cannot dispatch on in this position.
    #[error("field `{field}`: unsupported {kind} schema in this position")]
    UnsupportedSchema {
        field: String,
        kind: &'static str,
    },
}
