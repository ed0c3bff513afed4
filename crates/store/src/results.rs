use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use plutus_core::{CostResult, RequestId};
use plutus_ports::{ResultSink, StoreResult};

/// In-memory cost result store with upsert semantics
pub struct MemoryResultSink {
    results: Arc<DashMap<RequestId, CostResult>>,
}

impl MemoryResultSink {
    pub fn new() -> Self {
        Self {
            results: Arc::new(DashMap::new()),
        }
    }
}

impl Default for MemoryResultSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MemoryResultSink {
    fn clone(&self) -> Self {
        Self {
            results: Arc::clone(&self.results),
        }
    }
}

#[async_trait]
impl ResultSink for MemoryResultSink {
    async fn upsert(&self, result: &CostResult) -> StoreResult<()> {
        self.results.insert(result.request_id, result.clone());
        Ok(())
    }

    async fn get(&self, request_id: RequestId) -> StoreResult<Option<CostResult>> {
        Ok(self.results.get(&request_id).map(|r| r.value().clone()))
    }
}
