//! Cost Model Evaluators
//!
//! Pure evaluation functions for the two supported impact model families.
//! Every intermediate value is an exact [`Decimal`]; binary floating point
//! never enters the calculation, so equal inputs always produce
//! byte-identical outputs.
//!
//! # Models
//!
//! ## Percent-of-ADV - Linear Impact
//!
//! ```text
//! participation = notional / adv            # optionally clamped to cap
//! impact        = c × participation         # fraction of notional
//! cost_usd      = notional × impact
//! cost_bps      = impact × 10,000
//! ```
//!
//! ## Square Root - Concave Impact
//!
//! ```text
//! participation = shares / adv_shares
//! cost_bps      = a × √participation + b
//! cost_usd      = shares × price × cost_bps × 1e-4
//! ```

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::error::ModelError;

/// Basis points in one unit of notional
pub const BPS: Decimal = dec!(10000);

/// One basis point as a fraction of notional
pub const ONE_BPS: Decimal = dec!(0.0001);

/// Output of a single evaluator run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelCost {
    /// Estimated execution cost in USD
    pub cost_usd: Decimal,
    /// Estimated execution cost in basis points of notional
    pub cost_bps: Decimal,
}

/// Evaluate the linear percent-of-ADV model.
///
/// Participation is the trade's share of the day's dollar volume. When a
/// `cap` is supplied it bounds the participation used for costing, so
/// outsized orders degrade to the capped estimate instead of exploding.
pub fn calculate_pct_adv_cost(
    notional_usd: Decimal,
    adv_usd: Decimal,
    c: Decimal,
    cap: Option<Decimal>,
) -> Result<ModelCost, ModelError> {
    if notional_usd <= Decimal::ZERO {
        return Err(ModelError::NonPositiveNotional(notional_usd));
    }
    if adv_usd <= Decimal::ZERO {
        return Err(ModelError::NonPositiveAdv(adv_usd));
    }
    if let Some(cap) = cap {
        if cap <= Decimal::ZERO || cap > Decimal::ONE {
            return Err(ModelError::CapOutOfRange(cap));
        }
    }

    let mut participation = notional_usd / adv_usd;
    if let Some(cap) = cap {
        participation = participation.min(cap);
    }

    let impact = c * participation;
    Ok(ModelCost {
        cost_usd: notional_usd * impact,
        cost_bps: impact * BPS,
    })
}

/// Evaluate the square-root impact model.
///
/// Costs directly in basis points: `a × √(shares / adv_shares) + b`.
/// The square root is taken on the exact decimal participation ratio.
pub fn calculate_sqrt_cost(
    shares: Decimal,
    adv_shares: Decimal,
    price_usd: Decimal,
    a: Decimal,
    b: Decimal,
) -> Result<ModelCost, ModelError> {
    if shares <= Decimal::ZERO {
        return Err(ModelError::NonPositiveShares(shares));
    }
    if adv_shares <= Decimal::ZERO {
        return Err(ModelError::NonPositiveAdvShares(adv_shares));
    }
    if price_usd <= Decimal::ZERO {
        return Err(ModelError::NonPositivePrice(price_usd));
    }

    let participation = shares / adv_shares;
    let root = participation
        .sqrt()
        .ok_or(ModelError::SqrtUndefined(participation))?;

    let cost_bps = a * root + b;
    Ok(ModelCost {
        cost_usd: shares * price_usd * cost_bps * ONE_BPS,
        cost_bps,
    })
}
