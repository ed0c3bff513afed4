//! Typed views over stored model parameter maps
//!
//! Configuration rows carry free-form name/value pairs; these structs pull
//! out exactly the names each evaluator needs, failing fast when a required
//! coefficient is absent. Missing parameters are never defaulted.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::error::ModelError;

/// Coefficients for the percent-of-ADV model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PctAdvParams {
    pub c: Decimal,
    pub cap: Option<Decimal>,
}

impl PctAdvParams {
    pub fn from_config(parameters: &BTreeMap<String, Decimal>) -> Result<Self, ModelError> {
        let c = required(parameters, "c")?;
        let cap = parameters.get("cap").copied();
        Ok(Self { c, cap })
    }

    /// Canonical map of the values actually consumed, recorded in breakdowns
    pub fn params_used(&self) -> BTreeMap<String, Decimal> {
        let mut used = BTreeMap::from([("c".to_string(), self.c)]);
        if let Some(cap) = self.cap {
            used.insert("cap".to_string(), cap);
        }
        used
    }
}

/// Coefficients for the square-root model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqrtParams {
    pub a: Decimal,
    pub b: Decimal,
}

impl SqrtParams {
    /// Older configuration rows spell these coefficients uppercase, so both
    /// spellings are accepted; lowercase wins when a row carries both.
    pub fn from_config(parameters: &BTreeMap<String, Decimal>) -> Result<Self, ModelError> {
        let a = required_with_legacy(parameters, "a", "A")?;
        let b = required_with_legacy(parameters, "b", "B")?;
        Ok(Self { a, b })
    }

    /// Canonical map of the values actually consumed, recorded in breakdowns
    pub fn params_used(&self) -> BTreeMap<String, Decimal> {
        BTreeMap::from([("a".to_string(), self.a), ("b".to_string(), self.b)])
    }
}

fn required(
    parameters: &BTreeMap<String, Decimal>,
    name: &'static str,
) -> Result<Decimal, ModelError> {
    parameters
        .get(name)
        .copied()
        .ok_or(ModelError::MissingParameter(name))
}

fn required_with_legacy(
    parameters: &BTreeMap<String, Decimal>,
    name: &'static str,
    legacy: &str,
) -> Result<Decimal, ModelError> {
    parameters
        .get(name)
        .or_else(|| parameters.get(legacy))
        .copied()
        .ok_or(ModelError::MissingParameter(name))
}
