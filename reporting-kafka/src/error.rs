//! Broker and codec error types.

use thiserror::Error;

/// Errors from the broker clients.
#[derive(Error, Debug)]
pub enum BrokerError {
    /// Failed to create a client.
    #[error("failed to create Kafka client: {0}")]
    Creation(String),

    /// Topic administration failed.
    #[error("topic administration failed: {0}")]
    Admin(String),

    /// The broker acknowledged with an error, or never acknowledged.
    #[error("broker rejected record: {reason}")]
    Publish { reason: String },

    /// The record could not be serialized against its schema.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Errors from the Avro binary codec.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The schema definition was rejected by the serializer.
    #[error("serializer rejected schema: {0}")]
    Schema(String),

    /// The record does not serialize under the schema.
    #[error("record does not serialize under schema: {0}")]
    Encode(String),
}
