use clap::Parser;
use eoq_planner::utils::{logger, validation::Validate};
use eoq_planner::{CliConfig, LocalStorage, PlanEngine, PlanPipeline};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting eoq-planner CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 創建存儲和管道
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = PlanPipeline::new(storage, config);

    // 創建引擎並運行
    let engine = PlanEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ Plan run completed successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Plan run completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Plan run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                eoq_planner::utils::error::ErrorSeverity::Low => 0,
                eoq_planner::utils::error::ErrorSeverity::Medium => 2,
                eoq_planner::utils::error::ErrorSeverity::High => 1,
                eoq_planner::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
