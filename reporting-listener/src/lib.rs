//! # Reporting Data Listener
//!
//! Event-driven adapter for the reporting data platform. The listener
//! consumes entity-change notifications, fetches the current state of the
//! referenced entity from its upstream API, converts that state into a
//! schema-conformant Avro record using the schema registered for the
//! reporting topic, and publishes the result for downstream analytics.
//!
//! ## Architecture
//!
//! One message flows end-to-end through:
//!
//! 1. **Consumer**: receives change notifications from the inbound topic
//! 2. **Use case**: fetches the entity, fetches the schema, wraps the
//!    entity in the change envelope and builds the wire record
//! 3. **Broker gateway**: ensures the reporting topic exists and publishes
//!    with a delivery acknowledgment
//!
//! Fatal errors propagate to the hosting runtime with full message
//! context so its redelivery/dead-letter policy can take over; nothing is
//! retried internally.
//!
//! ## Modules
//!
//! - [`boundary`]: the inbound notification shape and known event types
//! - [`config`]: settings and dependency initialization
//! - [`consumer`]: the inbound notification consumer
//! - [`domain`]: the change envelope and the reported entity shapes
//! - [`gateway`]: upstream API, schema registry and broker collaborators
//! - [`listener`]: the message loop and event-type dispatch
//! - [`use_case`]: one processor per entity kind
//! - [`errors`]: the error taxonomy

pub mod boundary;
pub mod config;
pub mod consumer;
pub mod domain;
pub mod errors;
pub mod gateway;
pub mod listener;
pub mod use_case;

pub use config::Dependencies;
pub use errors::ListenerError;
