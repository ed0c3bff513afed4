use async_trait::async_trait;
use plutus_core::{LiquidityRecord, TradeDate};

use crate::StoreResult;

/// Read-side port for published ADV liquidity data
///
/// Lookups are keyed by uppercase ticker and session date. Absence of a
/// record means the pair cannot be estimated; callers decide how to fail.
#[async_trait]
pub trait LiquiditySource: Send + Sync {
    /// Fetch the ADV record for a ticker on a session date
    async fn get(&self, ticker: &str, trade_date: TradeDate) -> StoreResult<Option<LiquidityRecord>>;
}
