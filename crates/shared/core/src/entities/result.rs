use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ModelCostBreakdown, ModelKind, RequestId};
use crate::values::Timestamp;

/// The authoritative cost estimate for a request.
///
/// Holds every successful model evaluation plus the winning (minimum
/// `cost_bps`) breakdown promoted to the `total_*` fields. `adv_usd` is
/// the liquidity figure the evaluations consumed. The models map is
/// ordered so repeated serializations of the same result are identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostResult {
    pub request_id: RequestId,
    /// Average daily volume the evaluations were based on
    pub adv_usd: Decimal,
    pub models: BTreeMap<ModelKind, ModelCostBreakdown>,
    pub best_model: ModelKind,
    pub total_cost_usd: Decimal,
    pub total_cost_bps: Decimal,
    pub computed_at: Timestamp,
}

impl CostResult {
    /// The breakdown the `total_*` numbers were copied from
    pub fn best(&self) -> Option<&ModelCostBreakdown> {
        self.models.get(&self.best_model)
    }

    /// Check the structural invariants: at least one breakdown is present,
    /// the best model is one of them, its numbers match the totals, and no
    /// other breakdown beats it on basis points.
    pub fn validate(&self) -> bool {
        let Some(winner) = self.best() else {
            return false;
        };
        winner.cost_usd == self.total_cost_usd
            && winner.cost_bps == self.total_cost_bps
            && self
                .models
                .values()
                .all(|breakdown| self.total_cost_bps <= breakdown.cost_bps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn breakdown(kind: ModelKind, cost_usd: Decimal, cost_bps: Decimal) -> ModelCostBreakdown {
        ModelCostBreakdown {
            kind,
            version: 1,
            cost_usd,
            cost_bps,
            parameters: BTreeMap::new(),
        }
    }

    #[test]
    fn test_validate_accepts_consistent_result() {
        let winner = breakdown(ModelKind::PctAdv, dec!(50000), dec!(500));
        let result = CostResult {
            request_id: Uuid::new_v4(),
            adv_usd: dec!(10000000),
            models: BTreeMap::from([(ModelKind::PctAdv, winner.clone())]),
            best_model: ModelKind::PctAdv,
            total_cost_usd: winner.cost_usd,
            total_cost_bps: winner.cost_bps,
            computed_at: Utc::now(),
        };
        assert!(result.validate());
    }

    #[test]
    fn test_validate_rejects_best_model_missing_from_map() {
        let only = breakdown(ModelKind::Sqrt, dec!(2581.14), dec!(25.8114));
        let result = CostResult {
            request_id: Uuid::new_v4(),
            adv_usd: dec!(10000000),
            best_model: ModelKind::PctAdv,
            total_cost_usd: only.cost_usd,
            total_cost_bps: only.cost_bps,
            models: BTreeMap::from([(ModelKind::Sqrt, only)]),
            computed_at: Utc::now(),
        };
        assert!(!result.validate());
    }

    #[test]
    fn test_validate_rejects_totals_mismatch() {
        let winner = breakdown(ModelKind::Sqrt, dec!(2581.14), dec!(25.8114));
        let result = CostResult {
            request_id: Uuid::new_v4(),
            adv_usd: dec!(10000000),
            best_model: ModelKind::Sqrt,
            total_cost_usd: dec!(9999),
            total_cost_bps: winner.cost_bps,
            models: BTreeMap::from([(ModelKind::Sqrt, winner)]),
            computed_at: Utc::now(),
        };
        assert!(!result.validate());
    }

    #[test]
    fn test_validate_rejects_non_minimal_best_model() {
        let expensive = breakdown(ModelKind::PctAdv, dec!(50000), dec!(500));
        let cheap = breakdown(ModelKind::Sqrt, dec!(2581.14), dec!(25.8114));
        let result = CostResult {
            request_id: Uuid::new_v4(),
            adv_usd: dec!(10000000),
            best_model: ModelKind::PctAdv,
            total_cost_usd: expensive.cost_usd,
            total_cost_bps: expensive.cost_bps,
            models: BTreeMap::from([
                (ModelKind::PctAdv, expensive),
                (ModelKind::Sqrt, cheap),
            ]),
            computed_at: Utc::now(),
        };
        assert!(!result.validate());
    }

    #[test]
    fn test_model_map_serializes_with_stable_key_order() {
        let result = CostResult {
            request_id: Uuid::new_v4(),
            adv_usd: dec!(2000000),
            best_model: ModelKind::PctAdv,
            total_cost_usd: dec!(125),
            total_cost_bps: dec!(12.5),
            models: BTreeMap::from([
                (ModelKind::Sqrt, breakdown(ModelKind::Sqrt, dec!(200), dec!(20))),
                (
                    ModelKind::PctAdv,
                    breakdown(ModelKind::PctAdv, dec!(125), dec!(12.5)),
                ),
            ]),
            computed_at: Utc::now(),
        };
        let json = serde_json::to_string(&result).unwrap();
        // BTreeMap keys come out sorted, pct_adv ahead of sqrt
        let last_pct = json.rfind("\"pct_adv\"").unwrap();
        let first_sqrt = json.find("\"sqrt\"").unwrap();
        assert!(last_pct < first_sqrt);
        let restored: CostResult = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, result);
    }
}
