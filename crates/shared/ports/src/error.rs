use plutus_core::{RequestId, RequestStatus};
use thiserror::Error;

/// Errors raised by storage and dispatch adapters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("request {0} not found")]
    RequestNotFound(RequestId),

    #[error("request {0} already exists")]
    DuplicateRequest(RequestId),

    #[error("illegal status transition for {id}: {} -> {}", .from.as_str(), .to.as_str())]
    InvalidTransition {
        id: RequestId,
        from: RequestStatus,
        to: RequestStatus,
    },

    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
