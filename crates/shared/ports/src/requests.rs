use async_trait::async_trait;
use plutus_core::{RequestId, RequestStatus, TradeRequest};

use crate::StoreResult;

/// Repository for estimation request records
///
/// This port abstracts the system of record for submitted requests and
/// their lifecycle status.
#[async_trait]
pub trait RequestStore: Send + Sync {
    /// Persist a freshly accepted request
    ///
    /// Returns [`crate::StoreError::DuplicateRequest`] if the id is already
    /// taken.
    async fn create(&self, request: &TradeRequest) -> StoreResult<()>;

    /// Fetch a request by id
    async fn get(&self, id: RequestId) -> StoreResult<Option<TradeRequest>>;

    /// Move a request to a new lifecycle status
    ///
    /// Terminal statuses are final; the only write accepted on a concluded
    /// request is a repeat of the status it already holds.
    async fn update_status(&self, id: RequestId, status: RequestStatus) -> StoreResult<()>;
}
