pub mod engine;
pub mod eoq;
pub mod pipeline;

pub use crate::domain::model::{
    CostBreakdown, CurvePoint, OrderPolicy, PlanResult, PolicyEvaluation,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
pub use self::eoq::{compute_eoq, compute_tac, cost_curve, evaluate_policy};
