//! Minimum-cost model selection
//!
//! Runs every active model configuration against one request and promotes
//! the cheapest successful evaluation (by `cost_bps`) to the authoritative
//! estimate. Evaluation is synchronous and side-effect free; the only
//! injected dependency is the clock that stamps `computed_at`.

use std::collections::BTreeMap;
use std::sync::Arc;

use plutus_core::{
    CostResult, ImpactModelConfig, LiquidityRecord, ModelCostBreakdown, ModelKind, Price,
    TradeRequest,
};
use plutus_ports::Clock;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult, ModelError};
use crate::models::{calculate_pct_adv_cost, calculate_sqrt_cost};
use crate::params::{PctAdvParams, SqrtParams};

/// Evaluates all active models for a request and selects the winner
pub struct SelectionEngine {
    clock: Arc<dyn Clock>,
}

impl SelectionEngine {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Produce the authoritative cost estimate for one request.
    ///
    /// Resolution order:
    /// 1. liquidity must exist with positive `adv_usd`
    /// 2. a positive reference price must be known
    /// 3. every candidate model is evaluated independently; one candidate
    ///    per kind, newest configuration first
    /// 4. the lowest `cost_bps` wins, first evaluated on exact ties
    ///
    /// A failing candidate is skipped with a warning; the run only errors
    /// when inputs cannot be resolved or no candidate survives.
    pub fn evaluate(
        &self,
        request: &TradeRequest,
        liquidity: Option<&LiquidityRecord>,
        price: Option<Price>,
        configs: &[ImpactModelConfig],
    ) -> EngineResult<CostResult> {
        let adv_usd = liquidity
            .map(|record| record.adv_usd)
            .filter(|adv| *adv > Decimal::ZERO)
            .ok_or_else(|| EngineError::MissingLiquidity {
                ticker: request.ticker.clone(),
                trade_date: request.trade_date,
            })?;

        let price = price
            .filter(|p| *p > Decimal::ZERO)
            .ok_or_else(|| EngineError::UnresolvedPrice {
                ticker: request.ticker.clone(),
                trade_date: request.trade_date,
            })?;

        let mut models: BTreeMap<ModelKind, ModelCostBreakdown> = BTreeMap::new();
        let mut best: Option<(ModelKind, Decimal, Decimal)> = None;
        let mut attempted = 0usize;
        let mut last_error: Option<ModelError> = None;

        for config in configs.iter().filter(|config| config.active) {
            // One candidate per kind; callers hand configs newest-first
            if models.contains_key(&config.kind) {
                continue;
            }
            attempted += 1;

            match self.evaluate_candidate(request, adv_usd, price, config) {
                Ok(breakdown) => {
                    let is_better = match &best {
                        Some((_, _, best_bps)) => breakdown.cost_bps < *best_bps,
                        None => true,
                    };
                    if is_better {
                        best = Some((config.kind, breakdown.cost_usd, breakdown.cost_bps));
                    }
                    models.insert(config.kind, breakdown);
                }
                Err(err) => {
                    log::warn!(
                        "[{}] skipping {} v{}: {}",
                        request.id,
                        config.kind,
                        config.version,
                        err
                    );
                    last_error = Some(err);
                }
            }
        }

        match best {
            Some((best_model, total_cost_usd, total_cost_bps)) => {
                log::debug!(
                    "[{}] chose {} at {} bps from {} candidates",
                    request.id,
                    best_model,
                    total_cost_bps,
                    attempted
                );
                Ok(CostResult {
                    request_id: request.id,
                    adv_usd,
                    models,
                    best_model,
                    total_cost_usd,
                    total_cost_bps,
                    computed_at: self.clock.now(),
                })
            }
            None => match last_error {
                Some(last) => Err(EngineError::AllModelsFailed { attempted, last }),
                None => Err(EngineError::NoActiveModels),
            },
        }
    }

    fn evaluate_candidate(
        &self,
        request: &TradeRequest,
        adv_usd: Decimal,
        price: Price,
        config: &ImpactModelConfig,
    ) -> Result<ModelCostBreakdown, ModelError> {
        let (cost, parameters) = match config.kind {
            ModelKind::PctAdv => {
                let params = PctAdvParams::from_config(&config.parameters)?;
                let cost =
                    calculate_pct_adv_cost(request.notional_usd, adv_usd, params.c, params.cap)?;
                (cost, params.params_used())
            }
            ModelKind::Sqrt => {
                let params = SqrtParams::from_config(&config.parameters)?;
                // ADV is published in USD; the sqrt model works in shares
                let adv_shares = adv_usd / price;
                let cost = calculate_sqrt_cost(
                    Decimal::from(request.shares),
                    adv_shares,
                    price,
                    params.a,
                    params.b,
                )?;
                (cost, params.params_used())
            }
        };

        Ok(ModelCostBreakdown {
            kind: config.kind,
            version: config.version,
            cost_usd: cost.cost_usd,
            cost_bps: cost.cost_bps,
            parameters,
        })
    }
}
