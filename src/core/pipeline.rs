use crate::core::eoq::{cost_curve, evaluate_policy};
use crate::core::{ConfigProvider, OrderPolicy, Pipeline, PlanResult, Storage};
use crate::utils::error::{PlanError, Result};
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub struct PlanPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> PlanPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn read_policies_csv(&self, path: &str) -> Result<Vec<OrderPolicy>> {
        tracing::debug!("Reading policies file: {}", path);
        let data = std::fs::read(path)?;

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(data.as_slice());

        let mut policies = Vec::new();
        for row in reader.deserialize::<OrderPolicy>() {
            policies.push(row?);
        }
        Ok(policies)
    }

    fn render_results_csv(evaluations: &[crate::core::PolicyEvaluation]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(vec![]);
        writer.write_record([
            "name",
            "annual_demand",
            "order_cost",
            "holding_cost",
            "unit_cost",
            "eoq",
            "ordering_cost",
            "holding_component",
            "purchase_cost",
            "total_annual_cost",
        ])?;

        for eval in evaluations {
            writer.write_record([
                eval.policy.name.clone(),
                eval.policy.annual_demand.to_string(),
                eval.policy.order_cost.to_string(),
                eval.policy.holding_cost.to_string(),
                eval.policy.unit_cost.to_string(),
                format!("{:.6}", eval.eoq),
                format!("{:.6}", eval.costs.ordering_cost),
                format!("{:.6}", eval.costs.holding_cost),
                format!("{:.6}", eval.costs.purchase_cost),
                format!("{:.6}", eval.costs.total),
            ])?;
        }

        Self::writer_into_string(writer)
    }

    fn render_curve_csv(points: &[crate::core::CurvePoint]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(vec![]);
        writer.write_record(["quantity", "total_cost"])?;
        for point in points {
            writer.write_record([
                format!("{:.6}", point.quantity),
                format!("{:.6}", point.total_cost),
            ])?;
        }
        Self::writer_into_string(writer)
    }

    fn writer_into_string(writer: csv::Writer<Vec<u8>>) -> Result<String> {
        let bytes = writer
            .into_inner()
            .map_err(|e| PlanError::ProcessingError {
                message: format!("failed to flush CSV output: {}", e),
            })?;
        String::from_utf8(bytes).map_err(|e| PlanError::ProcessingError {
            message: format!("CSV output was not valid UTF-8: {}", e),
        })
    }

    fn render_report(evaluations: &[crate::core::PolicyEvaluation]) -> String {
        let mut lines = vec![
            "Inventory plan report".to_string(),
            format!(
                "Generated: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
            ),
            String::new(),
        ];

        for eval in evaluations {
            lines.push(eval.summary());
            lines.push(format!(
                "  ordering cost: {:.2}, holding cost: {:.2}, purchase cost: {:.2}",
                eval.costs.ordering_cost, eval.costs.holding_cost, eval.costs.purchase_cost
            ));
        }

        lines.join("\n")
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for PlanPipeline<S, C> {
    fn extract(&self) -> Result<Vec<OrderPolicy>> {
        // 批次模式優先：policies 檔案存在時讀取 CSV
        let policies = if let Some(path) = self.config.policies_file() {
            self.read_policies_csv(path)?
        } else {
            self.config.inline_policies()
        };

        if policies.is_empty() {
            return Err(PlanError::MissingConfigError {
                field: "policies".to_string(),
            });
        }

        Ok(policies)
    }

    fn transform(&self, policies: Vec<OrderPolicy>) -> Result<PlanResult> {
        let mut evaluations = Vec::with_capacity(policies.len());

        for policy in &policies {
            let eval = evaluate_policy(policy).map_err(|e| PlanError::DomainError {
                message: format!("policy '{}': {}", policy.name, e),
            })?;
            tracing::debug!("Evaluated {}", eval.summary());
            evaluations.push(eval);
        }

        // 成本曲線只對單一 policy 有意義
        let curve_output = if policies.len() == 1 && self.config.curve_points() >= 2 {
            let points = cost_curve(&policies[0], self.config.curve_points())?;
            Some(Self::render_curve_csv(&points)?)
        } else {
            None
        };

        let report_output = Self::render_report(&evaluations);
        let csv_output = Self::render_results_csv(&evaluations)?;
        let json_output = serde_json::to_string_pretty(&evaluations)?;

        Ok(PlanResult {
            evaluations,
            report_output,
            csv_output,
            curve_output,
            json_output,
        })
    }

    fn load(&self, result: PlanResult) -> Result<String> {
        if self.config.archive_output() {
            let zip_path = format!("{}/plan_output.zip", self.config.output_path());
            tracing::debug!(
                "Creating ZIP bundle with {} files",
                3 + usize::from(result.curve_output.is_some())
            );

            // 在記憶體中組裝 ZIP，完成後取回底層 Vec<u8>
            let zip_data = {
                let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

                zip.start_file::<_, ()>("plan_report.txt", FileOptions::default())?;
                zip.write_all(result.report_output.as_bytes())?;

                zip.start_file::<_, ()>("plan_results.csv", FileOptions::default())?;
                zip.write_all(result.csv_output.as_bytes())?;

                if let Some(curve) = &result.curve_output {
                    zip.start_file::<_, ()>("cost_curve.csv", FileOptions::default())?;
                    zip.write_all(curve.as_bytes())?;
                }

                zip.start_file::<_, ()>("evaluations.json", FileOptions::default())?;
                zip.write_all(result.json_output.as_bytes())?;

                zip.finish()?.into_inner()
            };

            self.storage.write_file("plan_output.zip", &zip_data)?;
            return Ok(zip_path);
        }

        self.storage
            .write_file("plan_report.txt", result.report_output.as_bytes())?;
        self.storage
            .write_file("plan_results.csv", result.csv_output.as_bytes())?;
        if let Some(curve) = &result.curve_output {
            self.storage.write_file("cost_curve.csv", curve.as_bytes())?;
        }
        self.storage
            .write_file("evaluations.json", result.json_output.as_bytes())?;

        Ok(self.config.output_path().to_string())
    }
}
