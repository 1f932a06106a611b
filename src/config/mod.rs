pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, OrderPolicy};
#[cfg(feature = "cli")]
use crate::utils::error::{PlanError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{
    self, validate_non_negative_value, validate_path, validate_positive_value, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "eoq-planner")]
#[command(about = "Computes the Economic Order Quantity and total annual cost for ordering policies")]
pub struct CliConfig {
    /// Name for the single policy given on the command line
    #[arg(long, default_value = "policy")]
    pub name: String,

    #[arg(long, default_value = "1000")]
    pub annual_demand: f64,

    #[arg(long, default_value = "25")]
    pub order_cost: f64,

    #[arg(long, default_value = "2")]
    pub holding_cost: f64,

    #[arg(long, default_value = "8")]
    pub unit_cost: f64,

    /// CSV file with one policy per row; overrides the single-policy flags
    #[arg(long)]
    pub policies_file: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Cost-curve sample count for single-policy runs (0 disables the curve)
    #[arg(long, default_value = "50")]
    pub curve_points: usize,

    /// Bundle the artifacts into a single plan_output.zip
    #[arg(long)]
    pub archive: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn policies_file(&self) -> Option<&str> {
        self.policies_file.as_deref()
    }

    fn inline_policies(&self) -> Vec<OrderPolicy> {
        vec![OrderPolicy {
            name: self.name.clone(),
            annual_demand: self.annual_demand,
            order_cost: self.order_cost,
            holding_cost: self.holding_cost,
            unit_cost: self.unit_cost,
        }]
    }

    fn curve_points(&self) -> usize {
        self.curve_points
    }

    fn archive_output(&self) -> bool {
        self.archive
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;

        if self.curve_points == 1 {
            return Err(PlanError::InvalidConfigValueError {
                field: "curve_points".to_string(),
                value: self.curve_points.to_string(),
                reason: "A curve needs at least 2 points (use 0 to disable)".to_string(),
            });
        }

        if let Some(file) = &self.policies_file {
            validation::validate_file_extension("policies_file", file, &["csv"])?;
        } else {
            validate_positive_value("annual_demand", self.annual_demand)?;
            validate_positive_value("order_cost", self.order_cost)?;
            validate_positive_value("holding_cost", self.holding_cost)?;
            validate_non_negative_value("unit_cost", self.unit_cost)?;
        }

        Ok(())
    }
}
