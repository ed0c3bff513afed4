use async_trait::async_trait;
use plutus_core::{ImpactModelConfig, ModelKind};

use crate::StoreResult;

/// Read-side port for impact model configurations
#[async_trait]
pub trait ModelSource: Send + Sync {
    /// All active configurations, newest first
    ///
    /// Ordering follows [`plutus_core::ImpactModelConfig::recency_cmp`]:
    /// creation time descending, then version descending, then kind.
    async fn active_models(&self) -> StoreResult<Vec<ImpactModelConfig>>;

    /// The most recent active configuration for one kind, if any
    async fn latest_model(&self, kind: ModelKind) -> StoreResult<Option<ImpactModelConfig>>;
}
