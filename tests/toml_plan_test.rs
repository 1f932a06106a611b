use anyhow::Result;
use eoq_planner::config::toml_config::TomlConfig;
use eoq_planner::utils::validation::Validate;
use eoq_planner::{LocalStorage, PlanEngine, PlanPipeline};
use tempfile::TempDir;

fn plan_toml(output_path: &str, extra: &str) -> String {
    format!(
        r#"
[plan]
name = "widget-plan"
description = "Quarterly widget ordering plan"
version = "1.0.0"

[[policy]]
name = "widgets"
annual_demand = 1000
order_cost = 25
holding_cost = 2
unit_cost = 8

[[policy]]
name = "gears"
annual_demand = 500
order_cost = 40
holding_cost = 4

[load]
output_path = "{}"
{}
"#,
        output_path, extra
    )
}

#[test]
fn test_toml_driven_plan_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let config = TomlConfig::from_toml_str(&plan_toml(&output_path, ""))?;
    config.validate()?;

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = PlanPipeline::new(storage, config);
    let engine = PlanEngine::new(pipeline);

    let result_path = engine.run()?;
    assert_eq!(result_path, output_path);

    let report = std::fs::read_to_string(temp_dir.path().join("plan_report.txt"))?;
    assert!(report.contains("widgets: EOQ = 158.114 units"));
    assert!(report.contains("gears: EOQ = 100.000 units"));

    // Two policies: results CSV has two rows, no cost curve
    let mut reader = csv::Reader::from_path(temp_dir.path().join("plan_results.csv"))?;
    let rows: Vec<csv::StringRecord> = reader.records().collect::<std::result::Result<_, _>>()?;
    assert_eq!(rows.len(), 2);
    assert!(!temp_dir.path().join("cost_curve.csv").exists());

    Ok(())
}

#[test]
fn test_toml_plan_with_compression() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let extra = "\n[load.compression]\nenabled = true\n";
    let config = TomlConfig::from_toml_str(&plan_toml(&output_path, extra))?;
    config.validate()?;

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = PlanPipeline::new(storage, config);
    let engine = PlanEngine::new(pipeline);

    let result_path = engine.run()?;
    assert!(result_path.contains("plan_output.zip"));
    assert!(temp_dir.path().join("plan_output.zip").exists());

    Ok(())
}

#[test]
fn test_toml_plan_rejects_zero_holding_cost() -> Result<()> {
    let toml = r#"
[plan]
name = "bad-plan"
description = "zero holding cost"
version = "1.0.0"

[[policy]]
name = "widgets"
annual_demand = 1000
order_cost = 25
holding_cost = 0

[load]
output_path = "./output"
"#;

    let config = TomlConfig::from_toml_str(toml)?;
    assert!(config.validate().is_err());

    Ok(())
}
