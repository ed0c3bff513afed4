//! Cost worker - drives one queued request to a terminal status

use std::sync::Arc;

use plutus_core::{RequestId, RequestStatus};
use plutus_engine::SelectionEngine;
use plutus_ports::{Clock, LiquiditySource, ModelSource, PriceSource, RequestStore, ResultSink};

use crate::error::WorkerError;

/// Evaluates requests pulled off the dispatch queue and persists the
/// outcome.
///
/// `process` is idempotent: re-running a `done` request recomputes and
/// overwrites its result, and a request already concluded as `error`
/// stays untouched.
pub struct CostWorker {
    requests: Arc<dyn RequestStore>,
    liquidity: Arc<dyn LiquiditySource>,
    prices: Arc<dyn PriceSource>,
    models: Arc<dyn ModelSource>,
    results: Arc<dyn ResultSink>,
    engine: SelectionEngine,
}

impl CostWorker {
    pub fn new(
        requests: Arc<dyn RequestStore>,
        liquidity: Arc<dyn LiquiditySource>,
        prices: Arc<dyn PriceSource>,
        models: Arc<dyn ModelSource>,
        results: Arc<dyn ResultSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            requests,
            liquidity,
            prices,
            models,
            results,
            engine: SelectionEngine::new(clock),
        }
    }

    /// Evaluate one request and conclude it as `done` or `error`.
    ///
    /// Returns the terminal status reached. `Err` means this attempt could
    /// not run at all (store unavailable, unknown id) and the caller decides
    /// whether to retry; nothing has been concluded in that case.
    pub async fn process(&self, request_id: RequestId) -> Result<RequestStatus, WorkerError> {
        let request = self
            .requests
            .get(request_id)
            .await?
            .ok_or(WorkerError::UnknownRequest(request_id))?;

        if request.status == RequestStatus::Error {
            log::debug!("[{}] already concluded as error, skipping", request_id);
            return Ok(RequestStatus::Error);
        }

        let liquidity = self
            .liquidity
            .get(&request.ticker, request.trade_date)
            .await?;
        let price = self
            .prices
            .reference_price(&request.ticker, request.trade_date)
            .await?;
        let configs = self.models.active_models().await?;

        match self
            .engine
            .evaluate(&request, liquidity.as_ref(), price, &configs)
        {
            Ok(result) => {
                self.results.upsert(&result).await?;
                self.requests
                    .update_status(request_id, RequestStatus::Done)
                    .await?;
                log::info!(
                    "[{}] {} {} {} on {}: {} bps via {}",
                    request_id,
                    request.side.as_str(),
                    request.shares,
                    request.ticker,
                    request.trade_date,
                    result.total_cost_bps,
                    result.best_model
                );
                Ok(RequestStatus::Done)
            }
            // A re-run may fail after reference data changed; the stored
            // result stays authoritative.
            Err(err) if request.status == RequestStatus::Done => {
                log::warn!(
                    "[{}] re-evaluation failed, keeping stored result: {}",
                    request_id,
                    err
                );
                Ok(RequestStatus::Done)
            }
            Err(err) => {
                log::warn!("[{}] evaluation failed: {}", request_id, err);
                self.requests
                    .update_status(request_id, RequestStatus::Error)
                    .await?;
                Ok(RequestStatus::Error)
            }
        }
    }
}
