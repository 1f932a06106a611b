use serde::{Deserialize, Serialize};

fn default_policy_name() -> String {
    "policy".to_string()
}

/// One named ordering policy: the four numeric inputs of an EOQ calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPolicy {
    #[serde(default = "default_policy_name")]
    pub name: String,
    pub annual_demand: f64,
    pub order_cost: f64,
    pub holding_cost: f64,
    #[serde(default)]
    pub unit_cost: f64,
}

/// The three components of the total annual cost at a given order quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub ordering_cost: f64,
    pub holding_cost: f64,
    pub purchase_cost: f64,
    pub total: f64,
}

/// A policy joined with its computed optimum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyEvaluation {
    pub policy: OrderPolicy,
    pub eoq: f64,
    pub costs: CostBreakdown,
}

impl PolicyEvaluation {
    /// The one-line result string shown to users and embedded in the report.
    pub fn summary(&self) -> String {
        format!(
            "{}: EOQ = {:.3} units, total annual cost = {:.2}",
            self.policy.name, self.eoq, self.costs.total
        )
    }
}

/// A sampled point of the cost curve around the optimum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurvePoint {
    pub quantity: f64,
    pub total_cost: f64,
}

#[derive(Debug, Clone)]
pub struct PlanResult {
    pub evaluations: Vec<PolicyEvaluation>,
    pub report_output: String,
    pub csv_output: String,
    pub curve_output: Option<String>,
    pub json_output: String,
}
