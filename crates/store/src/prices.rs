use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use plutus_core::{Price, TradeDate};
use plutus_ports::{PriceSource, StoreResult};

/// In-memory reference price store
///
/// Prices resolve in two tiers: an exact (ticker, date) pin wins over a
/// standing per-ticker price. With neither present the lookup is `None`;
/// no fallback price is ever fabricated.
pub struct MemoryPriceStore {
    pinned: Arc<DashMap<(String, TradeDate), Price>>,
    standing: Arc<DashMap<String, Price>>,
}

impl MemoryPriceStore {
    pub fn new() -> Self {
        Self {
            pinned: Arc::new(DashMap::new()),
            standing: Arc::new(DashMap::new()),
        }
    }

    /// Pin a price to an exact (ticker, date) pair
    pub fn set_price(&self, ticker: &str, trade_date: TradeDate, price: Price) {
        self.pinned
            .insert((ticker.trim().to_uppercase(), trade_date), price);
    }

    /// Set a standing price used for any date without a pin
    pub fn set_standing_price(&self, ticker: &str, price: Price) {
        self.standing.insert(ticker.trim().to_uppercase(), price);
    }
}

impl Default for MemoryPriceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MemoryPriceStore {
    fn clone(&self) -> Self {
        Self {
            pinned: Arc::clone(&self.pinned),
            standing: Arc::clone(&self.standing),
        }
    }
}

#[async_trait]
impl PriceSource for MemoryPriceStore {
    async fn reference_price(
        &self,
        ticker: &str,
        trade_date: TradeDate,
    ) -> StoreResult<Option<Price>> {
        let ticker = ticker.trim().to_uppercase();
        if let Some(price) = self.pinned.get(&(ticker.clone(), trade_date)) {
            return Ok(Some(*price.value()));
        }
        Ok(self.standing.get(&ticker).map(|price| *price.value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date() -> TradeDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    #[tokio::test]
    async fn test_pinned_price_wins_over_standing() {
        let store = MemoryPriceStore::new();
        store.set_standing_price("AAPL", dec!(150));
        store.set_price("AAPL", date(), dec!(151.25));

        let price = store.reference_price("AAPL", date()).await.unwrap();
        assert_eq!(price, Some(dec!(151.25)));
    }

    #[tokio::test]
    async fn test_standing_price_covers_unpinned_dates() {
        let store = MemoryPriceStore::new();
        store.set_standing_price("AAPL", dec!(150));

        let other_date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let price = store.reference_price("aapl", other_date).await.unwrap();
        assert_eq!(price, Some(dec!(150)));
    }

    #[tokio::test]
    async fn test_unknown_ticker_has_no_price() {
        let store = MemoryPriceStore::new();
        assert_eq!(store.reference_price("MSFT", date()).await.unwrap(), None);
    }
}
