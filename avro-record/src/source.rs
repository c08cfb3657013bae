//! Source object graph and field resolution.
//!
//! The builder never inspects caller types. Callers render their data into
//! [`SourceValue`], a closed set of variants the coercion layer can
//! pattern-match on, instead of the builder performing runtime type
//! introspection. [`ToSource`] is the binding seam: a domain type
//! implements it with an explicit field mapping, usually through
//! [`ObjectBuilder`].

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A node in the source object graph.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    DateTime(DateTime<Utc>),
    List(Vec<SourceValue>),
    /// Named fields in declaration order.
    Object(Vec<(String, SourceValue)>),
}

impl SourceValue {
    /// Case-sensitive field lookup.
    ///
    /// Absence is `None`, never an error: schemas may describe fields the
    /// source object does not carry, and the builder skips those.
    pub fn field(&self, name: &str) -> Option<&SourceValue> {
        match self {
            SourceValue::Object(fields) => {
                fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
            }
            _ => None,
        }
    }

    /// The runtime type name, for diagnostics and mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            SourceValue::Null => "null",
            SourceValue::Bool(_) => "boolean",
            SourceValue::Int(_) => "integer",
            SourceValue::Float(_) => "float",
            SourceValue::String(_) => "string",
            SourceValue::DateTime(_) => "datetime",
            SourceValue::List(_) => "list",
            SourceValue::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SourceValue::Null)
    }
}

/// Renders a value into the source graph.
pub trait ToSource {
    fn to_source(&self) -> SourceValue;
}

impl ToSource for SourceValue {
    fn to_source(&self) -> SourceValue {
        self.clone()
    }
}

impl ToSource for bool {
    fn to_source(&self) -> SourceValue {
        SourceValue::Bool(*self)
    }
}

impl ToSource for i32 {
    fn to_source(&self) -> SourceValue {
        SourceValue::Int(i64::from(*self))
    }
}

impl ToSource for i64 {
    fn to_source(&self) -> SourceValue {
        SourceValue::Int(*self)
    }
}

impl ToSource for f64 {
    fn to_source(&self) -> SourceValue {
        SourceValue::Float(*self)
    }
}

impl ToSource for str {
    fn to_source(&self) -> SourceValue {
        SourceValue::String(self.to_string())
    }
}

impl ToSource for String {
    fn to_source(&self) -> SourceValue {
        SourceValue::String(self.clone())
    }
}

impl ToSource for Uuid {
    fn to_source(&self) -> SourceValue {
        SourceValue::String(self.to_string())
    }
}

impl ToSource for DateTime<Utc> {
    fn to_source(&self) -> SourceValue {
        SourceValue::DateTime(*self)
    }
}

impl<T: ToSource> ToSource for Option<T> {
    fn to_source(&self) -> SourceValue {
        match self {
            Some(value) => value.to_source(),
            None => SourceValue::Null,
        }
    }
}

impl<T: ToSource> ToSource for Vec<T> {
    fn to_source(&self) -> SourceValue {
        SourceValue::List(self.iter().map(ToSource::to_source).collect())
    }
}

/// Assembles an [`SourceValue::Object`], preserving insertion order.
#[derive(Debug, Default)]
pub struct ObjectBuilder {
    fields: Vec<(String, SourceValue)>,
}

impl ObjectBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named field.
    pub fn field<T: ToSource + ?Sized>(mut self, name: &str, value: &T) -> Self {
        self.fields.push((name.to_string(), value.to_source()));
        self
    }

    pub fn build(self) -> SourceValue {
        SourceValue::Object(self.fields)
    }
}
