use async_trait::async_trait;
use plutus_core::{CostResult, RequestId};

use crate::StoreResult;

/// Write/read port for computed cost results
#[async_trait]
pub trait ResultSink: Send + Sync {
    /// Insert or fully replace the result for a request
    ///
    /// Upsert semantics make re-processing a concluded request harmless.
    async fn upsert(&self, result: &CostResult) -> StoreResult<()>;

    /// Fetch the stored result for a request, if one has been computed
    async fn get(&self, request_id: RequestId) -> StoreResult<Option<CostResult>>;
}
