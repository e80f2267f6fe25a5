use async_trait::async_trait;
use thiserror::Error;

use super::payload::EmailParams;

/// The only failure the form layer knows about; transport and remote rejection look the same.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("submission failed: {reason}")]
pub struct SubmissionFailure {
    pub reason: String,
}

impl SubmissionFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Delivers a form payload to the site owner.
#[async_trait(?Send)]
pub trait SubmissionGateway {
    async fn send(&self, params: EmailParams) -> Result<(), SubmissionFailure>;
}
