//! Worker and intake error types

use plutus_core::{RequestId, TradeDate, ValidationError};
use plutus_ports::StoreError;
use thiserror::Error;

/// Failures while driving one queued request to a terminal status.
///
/// A store failure is transient from the dispatcher's point of view and
/// eligible for retry. An unknown id cannot heal and is dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkerError {
    #[error("request {0} is not in the request store")]
    UnknownRequest(RequestId),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Failures reported to callers at the intake edge
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("no liquidity published for {ticker} on {trade_date}")]
    NoLiquidity { ticker: String, trade_date: TradeDate },

    #[error("no reference price for {ticker} on {trade_date}")]
    NoReferencePrice { ticker: String, trade_date: TradeDate },

    #[error("invalid request: {0}")]
    Invalid(#[from] ValidationError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
