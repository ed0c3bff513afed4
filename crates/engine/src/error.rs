//! Selection Engine errors

use plutus_core::TradeDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Input or parameter failure inside a single evaluator
///
/// A `ModelError` disqualifies one model from the current evaluation; it
/// never concludes the request by itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("notional must be positive, got {0}")]
    NonPositiveNotional(Decimal),

    #[error("adv_usd must be positive, got {0}")]
    NonPositiveAdv(Decimal),

    #[error("participation cap must be in (0, 1], got {0}")]
    CapOutOfRange(Decimal),

    #[error("shares must be positive, got {0}")]
    NonPositiveShares(Decimal),

    #[error("adv_shares must be positive, got {0}")]
    NonPositiveAdvShares(Decimal),

    #[error("price must be positive, got {0}")]
    NonPositivePrice(Decimal),

    #[error("required model parameter '{0}' is missing")]
    MissingParameter(&'static str),

    #[error("square root undefined for {0}")]
    SqrtUndefined(Decimal),
}

/// Failure of a whole evaluation run
///
/// Any of these concludes the request with status `error`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("no liquidity published for {ticker} on {trade_date}")]
    MissingLiquidity { ticker: String, trade_date: TradeDate },

    #[error("no usable reference price for {ticker} on {trade_date}")]
    UnresolvedPrice { ticker: String, trade_date: TradeDate },

    #[error("no active impact models configured")]
    NoActiveModels,

    #[error("all {attempted} candidate models failed, last error: {last}")]
    AllModelsFailed { attempted: usize, last: ModelError },
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
