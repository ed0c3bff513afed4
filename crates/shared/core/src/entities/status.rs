use serde::{Deserialize, Serialize};

/// Estimation request lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Request has been accepted and handed to the dispatch queue
    Queued,
    /// An authoritative cost result has been persisted
    Done,
    /// Evaluation concluded without a result
    Error,
}

impl RequestStatus {
    /// Returns true if the request has concluded (done or error)
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestStatus::Done | RequestStatus::Error)
    }

    /// Legal lifecycle moves: queued may conclude, terminal states never change.
    /// A same-status write is allowed so that concluded work can be re-applied
    /// idempotently.
    pub fn can_transition_to(&self, next: RequestStatus) -> bool {
        match self {
            RequestStatus::Queued => true,
            RequestStatus::Done | RequestStatus::Error => *self == next,
        }
    }

    /// Lowercase wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Queued => "queued",
            RequestStatus::Done => "done",
            RequestStatus::Error => "error",
        }
    }
}
