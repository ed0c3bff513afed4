use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

/// US-dollar amount - uses Decimal for precision
/// Future: could become a newtype with currency awareness
pub type Usd = Decimal;

/// Cost expressed in basis points (1 bps = 1e-4 of notional)
pub type Bps = Decimal;

/// Reference price in USD per share
pub type Price = Decimal;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Trading session date, no intraday component
pub type TradeDate = NaiveDate;

/// Equity ticker symbol, stored uppercase
pub type Ticker = String;
