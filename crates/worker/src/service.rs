//! Intake and status surface in front of the dispatch queue

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use plutus_core::{
    CostResult, EstimateInput, RequestId, RequestStatus, Side, Timestamp, TradeDate, TradeRequest,
    ValidationError,
};
use plutus_ports::{Clock, Dispatch, LiquiditySource, PriceSource, RequestStore, ResultSink};

use crate::error::ServiceError;

/// Point-in-time view of a request, with its result once concluded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusView {
    pub request_id: RequestId,
    pub ticker: String,
    pub shares: u64,
    pub side: Side,
    pub trade_date: TradeDate,
    pub notional_usd: Decimal,
    pub status: RequestStatus,
    pub created_at: Timestamp,
    pub result: Option<CostResult>,
}

/// Front door for cost estimation.
///
/// `submit` validates and prices a request, persists it, and hands it to
/// the dispatch queue; `status` reports where a request currently stands.
pub struct EstimationService {
    requests: Arc<dyn RequestStore>,
    liquidity: Arc<dyn LiquiditySource>,
    prices: Arc<dyn PriceSource>,
    results: Arc<dyn ResultSink>,
    dispatch: Arc<dyn Dispatch>,
    clock: Arc<dyn Clock>,
}

impl EstimationService {
    pub fn new(
        requests: Arc<dyn RequestStore>,
        liquidity: Arc<dyn LiquiditySource>,
        prices: Arc<dyn PriceSource>,
        results: Arc<dyn ResultSink>,
        dispatch: Arc<dyn Dispatch>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            requests,
            liquidity,
            prices,
            results,
            dispatch,
            clock,
        }
    }

    /// Validate input, price the notional, persist, and queue the request.
    ///
    /// Rejected up front when the ticker has no published liquidity or no
    /// reference price for the trade date; nothing is persisted in that
    /// case.
    pub async fn submit(&self, input: EstimateInput) -> Result<RequestId, ServiceError> {
        let ticker = input.ticker.trim().to_uppercase();
        if ticker.is_empty() {
            return Err(ValidationError::EmptyTicker.into());
        }
        if input.shares == 0 {
            return Err(ValidationError::ZeroShares.into());
        }

        if self.liquidity.get(&ticker, input.trade_date).await?.is_none() {
            return Err(ServiceError::NoLiquidity {
                ticker,
                trade_date: input.trade_date,
            });
        }

        let price = self
            .prices
            .reference_price(&ticker, input.trade_date)
            .await?
            .ok_or_else(|| ServiceError::NoReferencePrice {
                ticker: ticker.clone(),
                trade_date: input.trade_date,
            })?;

        let notional_usd = Decimal::from(input.shares) * price;
        let request = TradeRequest::new(
            &ticker,
            input.shares,
            input.side,
            input.trade_date,
            notional_usd,
            self.clock.now(),
        )?;

        self.requests.create(&request).await?;
        self.dispatch.enqueue(&request).await?;

        log::info!(
            "[{}] accepted {} {} {} for {}",
            request.id,
            request.side.as_str(),
            request.shares,
            request.ticker,
            request.trade_date
        );
        Ok(request.id)
    }

    /// Current status and, when available, the stored result
    pub async fn status(&self, request_id: RequestId) -> Result<Option<StatusView>, ServiceError> {
        let Some(request) = self.requests.get(request_id).await? else {
            return Ok(None);
        };
        let result = self.results.get(request_id).await?;
        Ok(Some(StatusView {
            request_id: request.id,
            ticker: request.ticker,
            shares: request.shares,
            side: request.side,
            trade_date: request.trade_date,
            notional_usd: request.notional_usd,
            status: request.status,
            created_at: request.created_at,
            result,
        }))
    }
}
