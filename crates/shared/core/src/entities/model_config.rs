use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::values::Timestamp;

/// The cost model family a configuration row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    /// Linear percent-of-ADV impact model
    PctAdv,
    /// Square-root impact model in basis points
    Sqrt,
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::PctAdv => "pct_adv",
            ModelKind::Sqrt => "sqrt",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A versioned, optionally active parameter set for one model kind.
///
/// Parameters are free-form name/value pairs; each evaluator decides
/// which names it requires. The map is ordered so that serialized
/// configurations are reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactModelConfig {
    pub kind: ModelKind,
    pub version: u32,
    pub parameters: BTreeMap<String, Decimal>,
    pub active: bool,
    pub created_at: Timestamp,
}

impl ImpactModelConfig {
    pub fn new(
        kind: ModelKind,
        version: u32,
        parameters: BTreeMap<String, Decimal>,
        active: bool,
        created_at: Timestamp,
    ) -> Self {
        Self {
            kind,
            version,
            parameters,
            active,
            created_at,
        }
    }

    /// Preference order between configurations: newest creation time first,
    /// then highest version, then kind name ascending. The engine evaluates
    /// configurations in this order and keeps the first seen per kind.
    pub fn recency_cmp(a: &Self, b: &Self) -> Ordering {
        b.created_at
            .cmp(&a.created_at)
            .then(b.version.cmp(&a.version))
            .then(a.kind.cmp(&b.kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn config(kind: ModelKind, version: u32, age_minutes: i64) -> ImpactModelConfig {
        ImpactModelConfig::new(
            kind,
            version,
            BTreeMap::new(),
            true,
            Utc::now() - Duration::minutes(age_minutes),
        )
    }

    #[test]
    fn test_newest_creation_time_sorts_first() {
        let older = config(ModelKind::PctAdv, 5, 60);
        let newer = config(ModelKind::Sqrt, 1, 1);
        let mut configs = vec![older.clone(), newer.clone()];
        configs.sort_by(ImpactModelConfig::recency_cmp);
        assert_eq!(configs[0].kind, ModelKind::Sqrt);
        assert_eq!(configs[1].kind, ModelKind::PctAdv);
    }

    #[test]
    fn test_version_breaks_creation_time_ties() {
        let at = Utc::now();
        let v1 = ImpactModelConfig::new(ModelKind::Sqrt, 1, BTreeMap::new(), true, at);
        let v2 = ImpactModelConfig::new(ModelKind::Sqrt, 2, BTreeMap::new(), true, at);
        let mut configs = vec![v1, v2];
        configs.sort_by(ImpactModelConfig::recency_cmp);
        assert_eq!(configs[0].version, 2);
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ModelKind::PctAdv).unwrap();
        assert_eq!(json, "\"pct_adv\"");
        let json = serde_json::to_string(&ModelKind::Sqrt).unwrap();
        assert_eq!(json, "\"sqrt\"");
    }
}
