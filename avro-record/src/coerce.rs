//! Value coercion.
//!
//! Converts a resolved source value into the wire representation implied
//! by the schema's declared type for the field. String targets stringify
//! unconditionally: identifiers, booleans and dates all have a string
//! form. Boolean and numeric targets are strict: a runtime type that does
//! not match the declared type is a schema/source mismatch and surfaces
//! as an error rather than being silently converted.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::BuildError;
use crate::schema::{EnumSchema, PrimitiveType};
use crate::source::SourceValue;
use crate::wire::{EnumSymbol, WireValue};

/// Whole seconds since 1970-01-01T00:00:00Z, floored.
///
/// The canonical date encoding for built records. All date coercion in
/// the builder goes through this function.
pub fn seconds_since_epoch(date: &DateTime<Utc>) -> i64 {
    date.timestamp()
}

/// Whole days since 1970-01-01, floored.
///
/// Legacy encoding kept for consumers whose schemas still carry
/// day-granularity `int` dates. Not used by the record builder; changing
/// a topic from one unit to the other needs sign-off from its schema
/// owners.
pub fn days_since_epoch(date: &DateTime<Utc>) -> i32 {
    date.timestamp().div_euclid(86_400) as i32
}

/// Coerce to a string target: every scalar stringifies.
pub(crate) fn string(field: &str, value: &SourceValue) -> Result<WireValue, BuildError> {
    let rendered = match value {
        SourceValue::Bool(b) => b.to_string(),
        SourceValue::Int(i) => i.to_string(),
        SourceValue::Float(f) => f.to_string(),
        SourceValue::String(s) => s.clone(),
        SourceValue::DateTime(d) => d.to_rfc3339_opts(SecondsFormat::Secs, true),
        SourceValue::Null | SourceValue::List(_) | SourceValue::Object(_) => {
            return Err(BuildError::Coercion {
                field: field.to_string(),
                expected: "string".to_string(),
                actual: value.type_name(),
            });
        }
    };
    Ok(WireValue::String(rendered))
}

/// Coerce to an enum target: the value's string form must be one of the
/// declared symbols.
pub(crate) fn enum_symbol(
    field: &str,
    value: &SourceValue,
    schema: &EnumSchema,
) -> Result<WireValue, BuildError> {
    let symbol = match string(field, value)? {
        WireValue::String(s) => s,
        _ => unreachable!("string coercion yields a string"),
    };
    let position = schema
        .symbols
        .iter()
        .position(|candidate| candidate == &symbol)
        .ok_or_else(|| BuildError::UnknownEnumSymbol {
            enum_name: schema.name.clone(),
            symbol: symbol.clone(),
        })?;

    Ok(WireValue::Enum(EnumSymbol {
        enum_name: schema.name.clone(),
        position: position as u32,
        symbol,
    }))
}

/// Coerce a runtime date value to its epoch-seconds wire form.
pub(crate) fn date(field: &str, value: &DateTime<Utc>) -> Result<WireValue, BuildError> {
    let seconds =
        i32::try_from(seconds_since_epoch(value)).map_err(|_| BuildError::TimestampOutOfRange {
            field: field.to_string(),
        })?;
    Ok(WireValue::Int(seconds))
}

/// Strict passthrough for boolean and numeric targets.
pub(crate) fn primitive(
    field: &str,
    value: &SourceValue,
    target: PrimitiveType,
) -> Result<WireValue, BuildError> {
    match (value, target) {
        // String targets are dispatched earlier, but keep the behavior
        // uniform for direct callers.
        (_, PrimitiveType::String) => string(field, value),
        (SourceValue::Bool(b), PrimitiveType::Boolean) => Ok(WireValue::Boolean(*b)),
        (SourceValue::Int(i), PrimitiveType::Int) => {
            i32::try_from(*i).map(WireValue::Int).map_err(|_| BuildError::Coercion {
                field: field.to_string(),
                expected: "int (32-bit)".to_string(),
                actual: "integer",
            })
        }
        (SourceValue::Int(i), PrimitiveType::Long) => Ok(WireValue::Long(*i)),
        (SourceValue::Float(f), PrimitiveType::Float) => Ok(WireValue::Float(*f as f32)),
        (SourceValue::Float(f), PrimitiveType::Double) => Ok(WireValue::Double(*f)),
        (value, target) => Err(BuildError::Coercion {
            field: field.to_string(),
            expected: target.name().to_string(),
            actual: value.type_name(),
        }),
    }
}
