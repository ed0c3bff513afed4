use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::values::Timestamp;

/// Published average-daily-volume snapshot for a ticker on a session date.
///
/// `adv_usd` is the sole liquidity input to every impact model; requests
/// for (ticker, date) pairs without a record cannot be estimated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidityRecord {
    pub ticker: String,
    pub trade_date: NaiveDate,
    /// Average daily volume in USD
    pub adv_usd: Decimal,
}

impl LiquidityRecord {
    pub fn new(ticker: &str, trade_date: NaiveDate, adv_usd: Decimal) -> Self {
        Self {
            ticker: ticker.trim().to_uppercase(),
            trade_date,
            adv_usd,
        }
    }
}

/// An ADV value held by a read-through cache, stamped with the time it
/// was copied out of the underlying source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedAdv {
    pub adv_usd: Decimal,
    pub cached_at: Timestamp,
}
