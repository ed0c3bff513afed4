use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ModelKind;

/// One model's evaluation of a request.
///
/// `parameters` records the exact values the evaluator consumed, so a
/// stored result can be audited against the configuration that produced
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCostBreakdown {
    pub kind: ModelKind,
    pub version: u32,
    /// Estimated execution cost in USD
    pub cost_usd: Decimal,
    /// Estimated execution cost in basis points of notional
    pub cost_bps: Decimal,
    pub parameters: BTreeMap<String, Decimal>,
}
