use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use plutus_core::{LiquidityRecord, TradeDate};
use plutus_ports::{LiquiditySource, StoreResult};

/// In-memory ADV liquidity store
///
/// Records are keyed by uppercase ticker and session date. Writes replace
/// whatever was previously published for the pair.
pub struct MemoryLiquidityStore {
    records: Arc<DashMap<(String, TradeDate), LiquidityRecord>>,
}

impl MemoryLiquidityStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(DashMap::new()),
        }
    }

    /// Publish (or replace) the ADV record for a (ticker, date) pair
    pub fn upsert(&self, record: LiquidityRecord) {
        let key = (record.ticker.clone(), record.trade_date);
        self.records.insert(key, record);
    }
}

impl Default for MemoryLiquidityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MemoryLiquidityStore {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

#[async_trait]
impl LiquiditySource for MemoryLiquidityStore {
    async fn get(
        &self,
        ticker: &str,
        trade_date: TradeDate,
    ) -> StoreResult<Option<LiquidityRecord>> {
        let key = (ticker.trim().to_uppercase(), trade_date);
        Ok(self.records.get(&key).map(|r| r.value().clone()))
    }
}
