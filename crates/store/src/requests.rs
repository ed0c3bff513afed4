use std::sync::Arc;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use plutus_core::{RequestId, RequestStatus, TradeRequest};
use plutus_ports::{RequestStore, StoreError, StoreResult};

/// In-memory request store
///
/// Thread-safe system of record for estimation requests using DashMap.
/// Status writes enforce the request lifecycle: a concluded request only
/// accepts a repeat of the status it already holds.
pub struct MemoryRequestStore {
    requests: Arc<DashMap<RequestId, TradeRequest>>,
}

impl MemoryRequestStore {
    pub fn new() -> Self {
        Self {
            requests: Arc::new(DashMap::new()),
        }
    }
}

impl Default for MemoryRequestStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MemoryRequestStore {
    fn clone(&self) -> Self {
        Self {
            requests: Arc::clone(&self.requests),
        }
    }
}

#[async_trait]
impl RequestStore for MemoryRequestStore {
    async fn create(&self, request: &TradeRequest) -> StoreResult<()> {
        match self.requests.entry(request.id) {
            Entry::Occupied(_) => Err(StoreError::DuplicateRequest(request.id)),
            Entry::Vacant(slot) => {
                slot.insert(request.clone());
                Ok(())
            }
        }
    }

    async fn get(&self, id: RequestId) -> StoreResult<Option<TradeRequest>> {
        Ok(self.requests.get(&id).map(|r| r.value().clone()))
    }

    async fn update_status(&self, id: RequestId, status: RequestStatus) -> StoreResult<()> {
        let Some(mut entry) = self.requests.get_mut(&id) else {
            return Err(StoreError::RequestNotFound(id));
        };
        let current = entry.status;
        if !current.can_transition_to(status) {
            return Err(StoreError::InvalidTransition {
                id,
                from: current,
                to: status,
            });
        }
        entry.status = status;
        Ok(())
    }
}
