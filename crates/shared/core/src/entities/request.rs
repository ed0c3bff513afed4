use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::{RequestStatus, Side};
use crate::values::Timestamp;

/// Unique identifier for an estimation request
pub type RequestId = Uuid;

/// Validation failures raised when constructing domain entities
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ticker must not be empty")]
    EmptyTicker,
    #[error("shares must be strictly positive")]
    ZeroShares,
    #[error("notional must be strictly positive, got {0}")]
    NonPositiveNotional(Decimal),
}

/// Raw estimation request as submitted by a caller, before any
/// normalization or pricing has been applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateInput {
    pub ticker: String,
    pub shares: u64,
    pub side: Side,
    pub trade_date: NaiveDate,
}

/// A persisted estimation request.
///
/// Construction validates the domain invariants: the ticker is normalized
/// to uppercase and must be non-empty, shares and notional are strictly
/// positive. A freshly built request always starts in `Queued`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRequest {
    pub id: RequestId,
    pub ticker: String,
    pub shares: u64,
    pub side: Side,
    pub trade_date: NaiveDate,
    /// Dollar value of the trade, `shares * reference price`
    pub notional_usd: Decimal,
    pub status: RequestStatus,
    pub created_at: Timestamp,
}

impl TradeRequest {
    /// Create a new request with a clock-provided timestamp
    pub fn new(
        ticker: &str,
        shares: u64,
        side: Side,
        trade_date: NaiveDate,
        notional_usd: Decimal,
        created_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let ticker = ticker.trim().to_uppercase();
        if ticker.is_empty() {
            return Err(ValidationError::EmptyTicker);
        }
        if shares == 0 {
            return Err(ValidationError::ZeroShares);
        }
        if notional_usd <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveNotional(notional_usd));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            ticker,
            shares,
            side,
            trade_date,
            notional_usd,
            status: RequestStatus::Queued,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn trade_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    #[test]
    fn test_new_request_normalizes_ticker_and_starts_queued() {
        let req = TradeRequest::new(
            "aapl",
            1_000,
            Side::Buy,
            trade_date(),
            dec!(150000),
            Utc::now(),
        )
        .unwrap();
        assert_eq!(req.ticker, "AAPL");
        assert_eq!(req.status, RequestStatus::Queued);
        assert_eq!(req.shares, 1_000);
    }

    #[test]
    fn test_rejects_empty_ticker() {
        let err = TradeRequest::new("  ", 100, Side::Sell, trade_date(), dec!(1000), Utc::now())
            .unwrap_err();
        assert_eq!(err, ValidationError::EmptyTicker);
    }

    #[test]
    fn test_rejects_zero_shares() {
        let err = TradeRequest::new("IBM", 0, Side::Buy, trade_date(), dec!(1000), Utc::now())
            .unwrap_err();
        assert_eq!(err, ValidationError::ZeroShares);
    }

    #[test]
    fn test_rejects_non_positive_notional() {
        let err = TradeRequest::new("IBM", 10, Side::Buy, trade_date(), dec!(0), Utc::now())
            .unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveNotional(dec!(0)));
    }
}
