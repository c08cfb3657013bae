//! Use cases: one processor per entity kind.
//!
//! Each use case runs one message end-to-end: fetch the entity, fetch the
//! schema, wrap the entity in the change envelope, build the wire record,
//! ensure the topic and publish. Every step's failure is fatal for the
//! message and propagates to the caller; the caller's redelivery policy
//! decides what happens next.

mod contact_details;
mod tenure;

use std::sync::Arc;

use async_trait::async_trait;

use crate::boundary::{event_types, EntityEvent};
use crate::errors::ListenerError;

pub use contact_details::ContactDetailsUseCase;
pub use tenure::TenureUseCase;

/// A processor for one inbound change notification.
#[async_trait]
pub trait MessageProcessing: Send + Sync {
    async fn process_message(&self, event: &EntityEvent) -> Result<(), ListenerError>;
}

/// Maps event types to their registered processor.
pub struct UseCaseRegistry {
    tenure: Arc<TenureUseCase>,
    contact_details: Arc<ContactDetailsUseCase>,
}

impl UseCaseRegistry {
    pub fn new(tenure: TenureUseCase, contact_details: ContactDetailsUseCase) -> Self {
        Self {
            tenure: Arc::new(tenure),
            contact_details: Arc::new(contact_details),
        }
    }

    /// The processor registered for an event type, if any. An event type
    /// nobody registered for is the caller's signal to skip the message.
    pub fn for_event_type(&self, event_type: &str) -> Option<Arc<dyn MessageProcessing>> {
        match event_type {
            event_types::TENURE_CREATED | event_types::TENURE_UPDATED => {
                Some(self.tenure.clone())
            }
            event_types::CONTACT_DETAIL_ADDED | event_types::CONTACT_DETAIL_UPDATED => {
                Some(self.contact_details.clone())
            }
            _ => None,
        }
    }
}
