//! End-to-End Estimation Flow Integration Test
//!
//! Drives the full stack through its public surface:
//! - EstimationService (intake and status)
//! - Dispatcher worker pool (bounded queue, duplicate suppression, retries)
//! - SelectionEngine (multi-model evaluation, minimum-cost winner)
//! - In-memory stores (requests, liquidity, prices, models, results)

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;

use plutus_clock::FixedClock;
use plutus_core::{
    EstimateInput, ImpactModelConfig, LiquidityRecord, ModelKind, RequestId, RequestStatus, Side,
    TradeDate,
};
use plutus_ports::{
    Clock, Dispatch, Enqueued, LiquiditySource, RequestStore, ResultSink, StoreError, StoreResult,
};
use plutus_store::{
    MemoryLiquidityStore, MemoryModelStore, MemoryPriceStore, MemoryRequestStore, MemoryResultSink,
};
use plutus_worker::{
    CostWorker, Dispatcher, DispatcherConfig, EstimationService, EstimatorBootstrap, ServiceError,
    StatusView,
};

fn trade_date() -> TradeDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(
        Utc.with_ymd_and_hms(2026, 3, 2, 15, 0, 0).unwrap(),
    ))
}

/// Small queue, two workers, fast retries; suitable for tests only
fn fast_config() -> DispatcherConfig {
    DispatcherConfig::default()
        .with_queue_capacity(16)
        .with_workers(2)
        .with_job_timeout(Duration::from_secs(5))
        .with_retries(3, vec![Duration::from_millis(5)])
}

fn pct_adv_config(c: rust_decimal::Decimal, cap: rust_decimal::Decimal) -> ImpactModelConfig {
    ImpactModelConfig::new(
        ModelKind::PctAdv,
        1,
        BTreeMap::from([("c".to_string(), c), ("cap".to_string(), cap)]),
        true,
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    )
}

fn sqrt_config(a: rust_decimal::Decimal, b: rust_decimal::Decimal) -> ImpactModelConfig {
    ImpactModelConfig::new(
        ModelKind::Sqrt,
        1,
        BTreeMap::from([("a".to_string(), a), ("b".to_string(), b)]),
        true,
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    )
}

/// Seed AAPL with 10M USD ADV and a $10 reference price
fn seed_aapl(stack: &EstimatorBootstrap) {
    stack
        .liquidity
        .upsert(LiquidityRecord::new("AAPL", trade_date(), dec!(10000000)));
    stack.prices.set_standing_price("AAPL", dec!(10));
}

fn buy(ticker: &str, shares: u64) -> EstimateInput {
    EstimateInput {
        ticker: ticker.to_string(),
        shares,
        side: Side::Buy,
        trade_date: trade_date(),
    }
}

async fn wait_for_terminal(service: &EstimationService, id: RequestId) -> StatusView {
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            if let Some(view) = service.status(id).await.unwrap() {
                if view.status.is_terminal() {
                    return view;
                }
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("request should conclude within the test budget")
}

/// Submit a 100k share buy against both models and check the cheaper
/// square-root estimate wins.
#[tokio::test]
async fn test_submit_to_done_selects_cheapest_model() {
    let _ = env_logger::try_init();

    let stack = EstimatorBootstrap::start_with_clock(fast_config(), fixed_clock(), None);
    seed_aapl(&stack);
    stack.models.upsert(pct_adv_config(dec!(0.5), dec!(0.1)));
    stack.models.upsert(sqrt_config(dec!(50), dec!(10)));

    let id = stack.service.submit(buy("AAPL", 100_000)).await.unwrap();
    let view = wait_for_terminal(&stack.service, id).await;

    assert_eq!(view.status, RequestStatus::Done);
    assert_eq!(view.notional_usd, dec!(1000000));

    let result = view.result.expect("done request carries a result");
    assert!(result.validate());
    assert_eq!(result.models.len(), 2);
    assert_eq!(result.adv_usd, dec!(10000000));
    // pct_adv: capped participation 0.1 * c 0.5 -> 500 bps
    // sqrt: 50 * sqrt(100k / 1M shares) + 10 -> 25.8114 bps, the winner
    assert_eq!(result.best_model, ModelKind::Sqrt);
    assert_eq!(result.total_cost_bps.round_dp(4), dec!(25.8114));
    assert_eq!(result.total_cost_usd.round_dp(2), dec!(2581.14));
    assert_eq!(result.models[&ModelKind::PctAdv].cost_bps, dec!(500));

    stack.dispatcher.shutdown();
}

/// With nothing active to evaluate, the request concludes as error.
#[tokio::test]
async fn test_no_active_models_concludes_error() {
    let _ = env_logger::try_init();

    let stack = EstimatorBootstrap::start_with_clock(fast_config(), fixed_clock(), None);
    seed_aapl(&stack);

    let id = stack.service.submit(buy("AAPL", 1_000)).await.unwrap();
    let view = wait_for_terminal(&stack.service, id).await;

    assert_eq!(view.status, RequestStatus::Error);
    assert!(view.result.is_none());

    stack.dispatcher.shutdown();
}

/// A model with a broken configuration is skipped; the survivor wins.
#[tokio::test]
async fn test_failing_model_falls_back_to_survivor() {
    let _ = env_logger::try_init();

    let stack = EstimatorBootstrap::start_with_clock(fast_config(), fixed_clock(), None);
    seed_aapl(&stack);
    // pct_adv is missing its coefficient and will fail coercion
    stack.models.upsert(ImpactModelConfig::new(
        ModelKind::PctAdv,
        1,
        BTreeMap::new(),
        true,
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    ));
    stack.models.upsert(sqrt_config(dec!(50), dec!(10)));

    let id = stack.service.submit(buy("AAPL", 100_000)).await.unwrap();
    let view = wait_for_terminal(&stack.service, id).await;

    assert_eq!(view.status, RequestStatus::Done);
    let result = view.result.unwrap();
    assert_eq!(result.best_model, ModelKind::Sqrt);
    assert_eq!(result.models.len(), 1);

    stack.dispatcher.shutdown();
}

/// Intake rejects tickers with no published liquidity or price before
/// anything is persisted.
#[tokio::test]
async fn test_intake_rejects_unpriceable_requests() {
    let _ = env_logger::try_init();

    let stack = EstimatorBootstrap::start_with_clock(fast_config(), fixed_clock(), None);

    let err = stack.service.submit(buy("MSFT", 100)).await.unwrap_err();
    assert!(matches!(err, ServiceError::NoLiquidity { .. }));

    stack
        .liquidity
        .upsert(LiquidityRecord::new("MSFT", trade_date(), dec!(5000000)));
    let err = stack.service.submit(buy("MSFT", 100)).await.unwrap_err();
    assert!(matches!(err, ServiceError::NoReferencePrice { .. }));

    stack.dispatcher.shutdown();
}

/// Re-processing a concluded request recomputes the same bytes and the
/// status stays done.
#[tokio::test]
async fn test_done_request_reprocesses_idempotently() {
    let _ = env_logger::try_init();

    let clock = fixed_clock();
    let stack = EstimatorBootstrap::start_with_clock(fast_config(), clock.clone(), None);
    seed_aapl(&stack);
    stack.models.upsert(pct_adv_config(dec!(0.5), dec!(0.1)));

    let id = stack.service.submit(buy("AAPL", 100_000)).await.unwrap();
    let first = wait_for_terminal(&stack.service, id).await;
    assert_eq!(first.status, RequestStatus::Done);

    // run the same id through a worker again, against the same stores
    let worker = CostWorker::new(
        Arc::new(stack.requests.clone()),
        Arc::new(stack.liquidity.clone()),
        Arc::new(stack.prices.clone()),
        Arc::new(stack.models.clone()),
        Arc::new(stack.results.clone()),
        clock,
    );
    let status = worker.process(id).await.unwrap();
    assert_eq!(status, RequestStatus::Done);

    let second = stack.service.status(id).await.unwrap().unwrap();
    assert_eq!(second.status, RequestStatus::Done);
    assert_eq!(second.result, first.result);

    stack.dispatcher.shutdown();
}

/// An id is suppressed while outstanding and released once concluded.
#[tokio::test]
async fn test_request_id_released_after_conclusion() {
    let _ = env_logger::try_init();

    let stack = EstimatorBootstrap::start_with_clock(fast_config(), fixed_clock(), None);
    seed_aapl(&stack);
    stack.models.upsert(pct_adv_config(dec!(0.5), dec!(0.1)));

    let id = stack.service.submit(buy("AAPL", 100_000)).await.unwrap();
    wait_for_terminal(&stack.service, id).await;

    let stored = stack.requests.get(id).await.unwrap().unwrap();
    let handle = stack.dispatcher.handle();

    // the worker clears the id shortly after concluding it
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            if handle.enqueue(&stored).await.unwrap() == Enqueued::Accepted {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("a concluded id should accept a fresh enqueue");

    stack.dispatcher.shutdown();
}

/// Liquidity source that fails a fixed number of reads before recovering
struct FlakyLiquidity {
    inner: MemoryLiquidityStore,
    remaining_failures: AtomicUsize,
    reads: AtomicUsize,
}

#[async_trait]
impl LiquiditySource for FlakyLiquidity {
    async fn get(
        &self,
        ticker: &str,
        trade_date: TradeDate,
    ) -> StoreResult<Option<LiquidityRecord>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let fail = self
            .remaining_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if fail {
            return Err(StoreError::Unavailable("liquidity store flapping".to_string()));
        }
        self.inner.get(ticker, trade_date).await
    }
}

/// Transient store failures are retried until the request concludes.
#[tokio::test]
async fn test_transient_store_failure_is_retried() {
    let _ = env_logger::try_init();

    let clock = fixed_clock();
    let requests = MemoryRequestStore::new();
    let liquidity = MemoryLiquidityStore::new();
    let prices = MemoryPriceStore::new();
    let models = MemoryModelStore::new();
    let results = MemoryResultSink::new();

    liquidity.upsert(LiquidityRecord::new("AAPL", trade_date(), dec!(10000000)));
    prices.set_standing_price("AAPL", dec!(10));
    models.upsert(pct_adv_config(dec!(0.5), dec!(0.1)));

    let flaky = Arc::new(FlakyLiquidity {
        inner: liquidity.clone(),
        remaining_failures: AtomicUsize::new(2),
        reads: AtomicUsize::new(0),
    });

    let worker = Arc::new(CostWorker::new(
        Arc::new(requests.clone()),
        flaky.clone(),
        Arc::new(prices.clone()),
        Arc::new(models.clone()),
        Arc::new(results.clone()),
        clock.clone(),
    ));
    let dispatcher = Dispatcher::start(worker, fast_config());

    let request = plutus_core::TradeRequest::new(
        "AAPL",
        100_000,
        Side::Buy,
        trade_date(),
        dec!(1000000),
        clock.now(),
    )
    .unwrap();
    requests.create(&request).await.unwrap();
    assert_eq!(
        dispatcher.handle().enqueue(&request).await.unwrap(),
        Enqueued::Accepted
    );

    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            let stored = requests.get(request.id).await.unwrap().unwrap();
            if stored.status == RequestStatus::Done {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("retries should conclude the request");

    // two failed attempts, then the read that succeeded
    assert_eq!(flaky.reads.load(Ordering::SeqCst), 3);
    let result = results.get(request.id).await.unwrap().unwrap();
    assert_eq!(result.total_cost_bps, dec!(500));

    dispatcher.shutdown();
}
