pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::cli::LocalStorage;
pub use crate::config::toml_config::TomlConfig;

pub use crate::core::engine::PlanEngine;
pub use crate::core::pipeline::PlanPipeline;
pub use crate::core::{compute_eoq, compute_tac, cost_curve, evaluate_policy};
pub use crate::domain::model::{
    CostBreakdown, CurvePoint, OrderPolicy, PlanResult, PolicyEvaluation,
};
pub use crate::utils::error::{PlanError, Result};
