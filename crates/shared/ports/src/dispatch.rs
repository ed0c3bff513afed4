use async_trait::async_trait;
use plutus_core::TradeRequest;

use crate::StoreResult;

/// Outcome of handing a request to the dispatch queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enqueued {
    /// The request was queued for background evaluation
    Accepted,
    /// The request is already queued or running; nothing was added
    Duplicate,
}

/// Port for handing accepted requests to background evaluation
///
/// Dispatch is keyed by request id, so submitting the same request twice
/// cannot produce two concurrent evaluations.
#[async_trait]
pub trait Dispatch: Send + Sync {
    /// Queue a request for evaluation
    async fn enqueue(&self, request: &TradeRequest) -> StoreResult<Enqueued>;
}
