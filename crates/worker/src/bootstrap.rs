//! Bootstrap - wiring for an in-memory estimation stack
//!
//! Assembles stores, selection engine, worker pool, and intake service
//! around a shared clock. Binaries and integration tests start here and
//! seed reference data through the exposed store handles.

use std::sync::Arc;

use chrono::Duration;

use plutus_clock::SystemClock;
use plutus_ports::{Clock, LiquiditySource};
use plutus_store::{
    AdvCache, MemoryLiquidityStore, MemoryModelStore, MemoryPriceStore, MemoryRequestStore,
    MemoryResultSink,
};

use crate::config::DispatcherConfig;
use crate::dispatcher::Dispatcher;
use crate::service::EstimationService;
use crate::worker::CostWorker;

/// A fully wired estimation stack.
///
/// The store handles stay public so callers can publish liquidity,
/// reference prices, and model configurations; all of them share state
/// with the running workers.
pub struct EstimatorBootstrap {
    pub liquidity: MemoryLiquidityStore,
    pub models: MemoryModelStore,
    pub prices: MemoryPriceStore,
    pub requests: MemoryRequestStore,
    pub results: MemoryResultSink,
    pub service: EstimationService,
    pub dispatcher: Dispatcher,
}

impl EstimatorBootstrap {
    /// Start with a system clock and a five minute ADV cache
    pub fn start(config: DispatcherConfig) -> Self {
        Self::start_with_clock(
            config,
            Arc::new(SystemClock::new()),
            Some(Duration::minutes(5)),
        )
    }

    /// Start with an explicit clock and ADV cache lifetime; deterministic
    /// tests pin both.
    pub fn start_with_clock(
        config: DispatcherConfig,
        clock: Arc<dyn Clock>,
        adv_cache_ttl: Option<Duration>,
    ) -> Self {
        let requests = MemoryRequestStore::new();
        let liquidity = MemoryLiquidityStore::new();
        let models = MemoryModelStore::new();
        let prices = MemoryPriceStore::new();
        let results = MemoryResultSink::new();

        // every ADV read in the stack goes through the same cache
        let cached_liquidity: Arc<dyn LiquiditySource> = Arc::new(AdvCache::new(
            liquidity.clone(),
            adv_cache_ttl,
            Arc::clone(&clock),
        ));

        let worker = Arc::new(CostWorker::new(
            Arc::new(requests.clone()),
            Arc::clone(&cached_liquidity),
            Arc::new(prices.clone()),
            Arc::new(models.clone()),
            Arc::new(results.clone()),
            Arc::clone(&clock),
        ));
        let dispatcher = Dispatcher::start(worker, config);

        let service = EstimationService::new(
            Arc::new(requests.clone()),
            cached_liquidity,
            Arc::new(prices.clone()),
            Arc::new(results.clone()),
            Arc::new(dispatcher.handle()),
            clock,
        );

        Self {
            liquidity,
            models,
            prices,
            requests,
            results,
            service,
            dispatcher,
        }
    }
}
