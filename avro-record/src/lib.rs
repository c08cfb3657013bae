//! # Avro Record
//!
//! Schema-driven conversion of structured values into Avro wire records.
//!
//! Given a schema document fetched from a schema registry and a source
//! object graph, the record builder walks the schema's field list, resolves
//! each field from the source by name, coerces the value into the wire
//! representation the schema declares, and assembles a schema-conformant
//! record. Fields the source does not carry are skipped, not errors:
//! registry schemas routinely describe more than any one upstream entity
//! exposes, and a missing field must never abort publishing.
//!
//! The whole crate is pure and synchronous. Schema trees are parsed once
//! per conversion, never mutated, and never shared; the only side effect
//! anywhere is diagnostic logging.
//!
//! ## Modules
//!
//! - [`schema`]: parses schema documents into [`SchemaNode`] descriptors
//! - [`source`]: the [`SourceValue`] graph and the [`ToSource`] binding trait
//! - [`coerce`]: value-to-wire coercions, including the epoch date encodings
//! - [`builder`]: the recursive record builder
//! - [`wire`]: the built [`WireRecord`] and [`WireValue`] output types
//! - [`error`]: the conversion error taxonomy

pub mod builder;
pub mod coerce;
pub mod error;
pub mod schema;
pub mod source;
pub mod wire;

pub use builder::build_record;
pub use error::{BuildError, SchemaParseError};
pub use schema::{EnumSchema, PrimitiveType, RecordSchema, SchemaField, SchemaNode};
pub use source::{ObjectBuilder, SourceValue, ToSource};
pub use wire::{EnumSymbol, WireRecord, WireValue};
