//! Plutus Core Domain
//!
//! Pure domain types for the Plutus trade cost estimation system.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    // Request lifecycle
    CachedAdv,
    CostResult,
    EstimateInput,
    // Model configuration & evaluation output
    ImpactModelConfig,
    LiquidityRecord,
    ModelCostBreakdown,
    ModelKind,
    RequestId,
    RequestStatus,
    Side,
    TradeRequest,
    ValidationError,
};
pub use values::{Bps, Price, Ticker, Timestamp, TradeDate, Usd};
