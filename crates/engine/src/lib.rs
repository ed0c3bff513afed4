//! Plutus Selection Engine
//!
//! Pure evaluation core of the cost estimation system. Given one request
//! and its resolved market inputs, the engine runs every active impact
//! model and promotes the cheapest estimate to the authoritative result:
//!
//! ```text
//! TradeRequest ──► ┌──────────────────────────────────────┐
//! LiquidityRecord  │           Selection Engine           │
//! Reference Price  │  ┌────────────────────────────────┐  │
//! Model Configs ─► │  │  per-kind candidate evaluation │  │
//!                  │  │  - pct_adv: c × min(p, cap)    │  │
//!                  │  │  - sqrt:   a × √p + b          │  │
//!                  │  └───────────────┬────────────────┘  │
//!                  │                  │ breakdowns         │
//!                  │  ┌───────────────▼────────────────┐  │
//!                  │  │  minimum cost_bps selection    │  │
//!                  │  │  (ties keep first evaluated)   │  │
//!                  │  └───────────────┬────────────────┘  │
//!                  └──────────────────┼───────────────────┘
//!                                     ▼
//!                                CostResult
//! ```
//!
//! All arithmetic is exact decimal end to end. Model failures are
//! recoverable (that candidate is skipped); unresolvable inputs and an
//! empty surviving set fail the whole evaluation.

mod error;
mod models;
mod params;
mod selection;

pub use error::{EngineError, EngineResult, ModelError};
pub use models::{calculate_pct_adv_cost, calculate_sqrt_cost, ModelCost, BPS, ONE_BPS};
pub use params::{PctAdvParams, SqrtParams};
pub use selection::SelectionEngine;
