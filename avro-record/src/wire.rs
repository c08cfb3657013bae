//! Built wire values.
//!
//! The output side of a conversion: an ordered, schema-conformant record
//! ready for binary serialization. Shapes mirror the schema descriptor
//! restricted to what a record can contain.

/// A coerced field value.
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    Null,
    Boolean(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    Enum(EnumSymbol),
    Record(WireRecord),
    Array(Vec<WireValue>),
}

/// A symbolic enum value: the schema's enum name, the chosen symbol and
/// its declared position.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumSymbol {
    pub enum_name: String,
    pub position: u32,
    pub symbol: String,
}

/// An ordered mapping from field name to coerced value.
///
/// Field order mirrors schema declaration order, so two builds from the
/// same inputs are identical.
#[derive(Debug, Clone, PartialEq)]
pub struct WireRecord {
    pub name: String,
    pub fields: Vec<(String, WireValue)>,
}

impl WireRecord {
    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&WireValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Field names in output order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }
}
