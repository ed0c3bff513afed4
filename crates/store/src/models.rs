use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use plutus_core::{ImpactModelConfig, ModelKind};
use plutus_ports::{ModelSource, StoreResult};

/// In-memory impact model configuration store
///
/// Configurations are keyed by (kind, version); re-upserting a key
/// replaces the row, which is also how a version is activated or retired.
pub struct MemoryModelStore {
    configs: Arc<DashMap<(ModelKind, u32), ImpactModelConfig>>,
}

impl MemoryModelStore {
    pub fn new() -> Self {
        Self {
            configs: Arc::new(DashMap::new()),
        }
    }

    /// Insert or replace one configuration row
    pub fn upsert(&self, config: ImpactModelConfig) {
        self.configs.insert((config.kind, config.version), config);
    }
}

impl Default for MemoryModelStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MemoryModelStore {
    fn clone(&self) -> Self {
        Self {
            configs: Arc::clone(&self.configs),
        }
    }
}

#[async_trait]
impl ModelSource for MemoryModelStore {
    async fn active_models(&self) -> StoreResult<Vec<ImpactModelConfig>> {
        let mut configs: Vec<_> = self
            .configs
            .iter()
            .filter(|entry| entry.value().active)
            .map(|entry| entry.value().clone())
            .collect();
        configs.sort_by(ImpactModelConfig::recency_cmp);
        Ok(configs)
    }

    async fn latest_model(&self, kind: ModelKind) -> StoreResult<Option<ImpactModelConfig>> {
        Ok(self
            .active_models()
            .await?
            .into_iter()
            .find(|config| config.kind == kind))
    }
}
