//! Registration submission port
//!
//! The registration service is external and unseen; this port is its
//! request/response contract. Implementations live in the infrastructure
//! layer (e.g. an HTTP client).

use async_trait::async_trait;
use thiserror::Error;

use crate::registration::{RegistrationResponse, SubmissionPayload};

/// Every variant is recoverable: the draft stays intact and the user may retry.
#[derive(Debug, Clone, Error)]
pub enum SubmissionError {
    #[error("registration service unreachable: {0}")]
    Transport(String),

    #[error("registration rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("registration service returned an unreadable response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait RegistrationSubmissionPort: Send + Sync {
    async fn submit(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<RegistrationResponse, SubmissionError>;
}
