use crate::core::{ConfigProvider, OrderPolicy};
use crate::utils::error::{PlanError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_non_negative_value, validate_path,
    validate_positive_number, validate_positive_value, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub plan: PlanConfig,
    #[serde(default)]
    pub policy: Vec<OrderPolicy>,
    pub curve: Option<CurveConfig>,
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveConfig {
    pub points: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub compression: Option<CompressionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PlanError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PlanError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        // 使用正規表達式匹配 ${VAR_NAME} 格式
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("plan.name", &self.plan.name)?;

        // 驗證輸出路徑
        validate_path("load.output_path", &self.load.output_path)?;

        // 至少需要一個 policy
        if self.policy.is_empty() {
            return Err(PlanError::MissingConfigError {
                field: "policy".to_string(),
            });
        }

        // 驗證每個 policy 的數值
        for policy in &self.policy {
            validate_positive_value(&format!("policy.{}.annual_demand", policy.name), policy.annual_demand)?;
            validate_positive_value(&format!("policy.{}.order_cost", policy.name), policy.order_cost)?;
            validate_positive_value(&format!("policy.{}.holding_cost", policy.name), policy.holding_cost)?;
            validate_non_negative_value(&format!("policy.{}.unit_cost", policy.name), policy.unit_cost)?;
        }

        // 驗證曲線取樣點數
        if let Some(curve) = &self.curve {
            validate_positive_number("curve.points", curve.points, 2)?;
        }

        Ok(())
    }

    /// 取得輸出路徑
    pub fn output_path(&self) -> &str {
        &self.load.output_path
    }

    /// 取得監控設定
    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn policies_file(&self) -> Option<&str> {
        // TOML 配置的 policies 直接寫在 [[policy]] 表中
        None
    }

    fn inline_policies(&self) -> Vec<OrderPolicy> {
        self.policy.clone()
    }

    fn curve_points(&self) -> usize {
        self.curve.as_ref().map(|c| c.points).unwrap_or(50)
    }

    fn archive_output(&self) -> bool {
        self.load
            .compression
            .as_ref()
            .map(|c| c.enabled)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC_CONFIG: &str = r#"
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

[curve]
points = 50

[load]
output_path = "./output"
"#;

    #[test]
    fn test_parse_basic_toml_config() {
        let config = TomlConfig::from_toml_str(BASIC_CONFIG).unwrap();
        assert_eq!(config.plan.name, "widget-plan");
        assert_eq!(config.policy.len(), 1);
        assert_eq!(config.policy[0].annual_demand, 1000.0);
        assert_eq!(config.curve_points(), 50);
        assert!(!config.archive_output());
        assert!(!config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(BASIC_CONFIG.as_bytes()).unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.plan.name, "widget-plan");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("EOQ_TEST_OUTPUT", "/tmp/eoq-out");

        let content = r#"
[plan]
name = "env-plan"
description = "plan with env output"
version = "1.0.0"

[[policy]]
name = "widgets"
annual_demand = 1000
order_cost = 25
holding_cost = 2

[load]
output_path = "${EOQ_TEST_OUTPUT}"
"#;

        let config = TomlConfig::from_toml_str(content).unwrap();
        assert_eq!(config.output_path(), "/tmp/eoq-out");
    }

    #[test]
    fn test_unknown_env_var_left_as_is() {
        let content = r#"
[plan]
name = "env-plan"
description = "plan with unknown env var"
version = "1.0.0"

[[policy]]
name = "widgets"
annual_demand = 1000
order_cost = 25
holding_cost = 2

[load]
output_path = "${EOQ_TEST_DOES_NOT_EXIST}"
"#;

        let config = TomlConfig::from_toml_str(content).unwrap();
        assert_eq!(config.output_path(), "${EOQ_TEST_DOES_NOT_EXIST}");
    }

    #[test]
    fn test_rejects_missing_policies() {
        let content = r#"
[plan]
name = "empty-plan"
description = "no policies"
version = "1.0.0"

[load]
output_path = "./output"
"#;

        let config = TomlConfig::from_toml_str(content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(PlanError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_policy_values() {
        let content = r#"
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

        let config = TomlConfig::from_toml_str(content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_compression_section_enables_archive() {
        let content = r#"
[plan]
name = "zip-plan"
description = "archived output"
version = "1.0.0"

[[policy]]
name = "widgets"
annual_demand = 1000
order_cost = 25
holding_cost = 2

[load]
output_path = "./output"

[load.compression]
enabled = true
"#;

        let config = TomlConfig::from_toml_str(content).unwrap();
        assert!(config.archive_output());
    }
}
