use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use dashmap::DashMap;
use plutus_core::{CachedAdv, LiquidityRecord, TradeDate};
use plutus_ports::{Clock, LiquiditySource, StoreResult};

/// Read-through TTL cache over any [`LiquiditySource`]
///
/// Hits are served from memory while fresh; misses and stale entries fall
/// through to the wrapped source and refresh the cache. Only found records
/// are cached, so an absent (ticker, date) pair is re-queried every time
/// and becomes visible as soon as it is published.
pub struct AdvCache<S> {
    source: S,
    entries: Arc<DashMap<(String, TradeDate), CachedAdv>>,
    /// `None` means entries never expire
    ttl: Option<Duration>,
    clock: Arc<dyn Clock>,
}

impl<S: LiquiditySource> AdvCache<S> {
    pub fn new(source: S, ttl: Option<Duration>, clock: Arc<dyn Clock>) -> Self {
        Self {
            source,
            entries: Arc::new(DashMap::new()),
            ttl,
            clock,
        }
    }

    fn is_fresh(&self, entry: &CachedAdv) -> bool {
        match self.ttl {
            None => true,
            Some(ttl) => self.clock.now() - entry.cached_at < ttl,
        }
    }
}

impl<S: Clone> Clone for AdvCache<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            entries: Arc::clone(&self.entries),
            ttl: self.ttl,
            clock: Arc::clone(&self.clock),
        }
    }
}

#[async_trait]
impl<S: LiquiditySource> LiquiditySource for AdvCache<S> {
    async fn get(
        &self,
        ticker: &str,
        trade_date: TradeDate,
    ) -> StoreResult<Option<LiquidityRecord>> {
        let key = (ticker.trim().to_uppercase(), trade_date);

        if let Some(entry) = self.entries.get(&key) {
            if self.is_fresh(entry.value()) {
                return Ok(Some(LiquidityRecord {
                    ticker: key.0,
                    trade_date,
                    adv_usd: entry.value().adv_usd,
                }));
            }
        }

        let record = self.source.get(&key.0, trade_date).await?;
        match &record {
            Some(found) => {
                self.entries.insert(
                    key,
                    CachedAdv {
                        adv_usd: found.adv_usd,
                        cached_at: self.clock.now(),
                    },
                );
            }
            None => {
                self.entries.remove(&key);
            }
        }
        Ok(record)
    }
}
