//! Domain model: the change envelope and the reported entity shapes.

pub mod contact_details;
pub mod envelope;
pub mod tenure;

pub use contact_details::ContactDetails;
pub use envelope::{ActingUser, ChangeEnvelope};
pub use tenure::Tenure;
