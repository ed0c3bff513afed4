use async_trait::async_trait;
use plutus_core::{Price, TradeDate};

use crate::StoreResult;

/// Read-side port for reference prices
///
/// A price may be pinned to an exact (ticker, date) pair or supplied as a
/// standing per-ticker override. `None` means no price is known; the
/// system never invents one.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Resolve the reference price for a ticker on a session date
    async fn reference_price(&self, ticker: &str, trade_date: TradeDate)
        -> StoreResult<Option<Price>>;
}
