use crate::prelude::*;

pub const ERROR_RESPONSE_PREFIX: &str = "ERROR: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Submitted { tx_hash: String },
    Failed { reason: String },
}

/// Outcome of one recipient of the batch.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SubmissionRecord {
    #[getset(get = "pub")]
    address: RecipientAddress,

    #[getset(get = "pub")]
    outcome: SubmissionOutcome,
}

impl SubmissionRecord {
    pub fn submitted(address: RecipientAddress, tx_hash: impl Into<String>) -> Self {
        Self {
            address,
            outcome: SubmissionOutcome::Submitted {
                tx_hash: tx_hash.into(),
            },
        }
    }

    pub fn failed(address: RecipientAddress, reason: impl Into<String>) -> Self {
        Self {
            address,
            outcome: SubmissionOutcome::Failed {
                reason: reason.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, SubmissionOutcome::Submitted { .. })
    }

    /// The `response` column of the results file.
    pub fn response(&self) -> String {
        match &self.outcome {
            SubmissionOutcome::Submitted { tx_hash } => tx_hash.clone(),
            SubmissionOutcome::Failed { reason } => format!("{ERROR_RESPONSE_PREFIX}{reason}"),
        }
    }
}
