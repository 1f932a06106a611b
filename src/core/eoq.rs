//! Closed-form EOQ and total-annual-cost calculators.

use crate::domain::model::{CostBreakdown, CurvePoint, OrderPolicy, PolicyEvaluation};
use crate::utils::error::{PlanError, Result};

/// Computes the Economic Order Quantity:
/// `sqrt(2 * annual_demand * order_cost / holding_cost)`.
///
/// Rejects a zero holding cost (division by zero) and any input combination
/// whose radicand is negative or non-finite.
pub fn compute_eoq(annual_demand: f64, order_cost: f64, holding_cost: f64) -> Result<f64> {
    if holding_cost == 0.0 {
        return Err(PlanError::DomainError {
            message: "holding_cost must be non-zero".to_string(),
        });
    }

    let radicand = (2.0 * annual_demand * order_cost) / holding_cost;
    if !radicand.is_finite() {
        return Err(PlanError::DomainError {
            message: format!("EOQ radicand is not finite: {}", radicand),
        });
    }
    if radicand < 0.0 {
        return Err(PlanError::DomainError {
            message: format!("EOQ radicand is negative: {}", radicand),
        });
    }

    Ok(radicand.sqrt())
}

/// Computes the total annual cost at order quantity `eoq`:
/// `(annual_demand / eoq) * order_cost + (eoq / 2) * holding_cost
///  + unit_cost * annual_demand`.
///
/// Rejects a zero order quantity (division by zero).
pub fn compute_tac(
    eoq: f64,
    annual_demand: f64,
    order_cost: f64,
    holding_cost: f64,
    unit_cost: f64,
) -> Result<f64> {
    if eoq == 0.0 {
        return Err(PlanError::DomainError {
            message: "order quantity must be non-zero".to_string(),
        });
    }

    Ok((annual_demand / eoq) * order_cost + (eoq / 2.0) * holding_cost
        + unit_cost * annual_demand)
}

impl CostBreakdown {
    /// Evaluates the three cost components of a policy at an arbitrary order
    /// quantity. `total` equals [`compute_tac`] for the same inputs.
    pub fn for_quantity(policy: &OrderPolicy, quantity: f64) -> Result<Self> {
        if quantity == 0.0 {
            return Err(PlanError::DomainError {
                message: "order quantity must be non-zero".to_string(),
            });
        }

        let ordering_cost = (policy.annual_demand / quantity) * policy.order_cost;
        let holding_cost = (quantity / 2.0) * policy.holding_cost;
        let purchase_cost = policy.unit_cost * policy.annual_demand;

        Ok(Self {
            ordering_cost,
            holding_cost,
            purchase_cost,
            total: ordering_cost + holding_cost + purchase_cost,
        })
    }
}

/// Evaluates a policy at its optimum: EOQ first, then the cost breakdown at
/// that quantity.
pub fn evaluate_policy(policy: &OrderPolicy) -> Result<PolicyEvaluation> {
    let eoq = compute_eoq(policy.annual_demand, policy.order_cost, policy.holding_cost)?;
    let costs = CostBreakdown::for_quantity(policy, eoq)?;

    Ok(PolicyEvaluation {
        policy: policy.clone(),
        eoq,
        costs,
    })
}

/// Samples the total-cost curve at `points` evenly spaced quantities over
/// `[EOQ/4, 2*EOQ]`. The curve is convex with its minimum at the EOQ.
pub fn cost_curve(policy: &OrderPolicy, points: usize) -> Result<Vec<CurvePoint>> {
    if points < 2 {
        return Err(PlanError::ProcessingError {
            message: format!("cost curve needs at least 2 points, got {}", points),
        });
    }

    let eoq = compute_eoq(policy.annual_demand, policy.order_cost, policy.holding_cost)?;
    let lo = eoq / 4.0;
    let hi = eoq * 2.0;
    let step = (hi - lo) / (points - 1) as f64;

    (0..points)
        .map(|i| {
            let quantity = lo + step * i as f64;
            let total_cost = compute_tac(
                quantity,
                policy.annual_demand,
                policy.order_cost,
                policy.holding_cost,
                policy.unit_cost,
            )?;
            Ok(CurvePoint {
                quantity,
                total_cost,
            })
        })
        .collect()
}
