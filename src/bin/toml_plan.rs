use clap::Parser;
use eoq_planner::config::toml_config::TomlConfig;
use eoq_planner::core::evaluate_policy;
use eoq_planner::utils::{logger, validation::Validate};
use eoq_planner::{LocalStorage, PlanEngine, PlanPipeline};

#[derive(Parser)]
#[command(name = "toml-plan")]
#[command(about = "EOQ planning tool driven by a TOML plan file")]
struct Args {
    /// Path to TOML plan file
    #[arg(short, long, default_value = "plan-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - validate and summarize without writing artifacts
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based planning tool");
    tracing::info!("📁 Loading plan from: {}", args.config);

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load plan file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Plan validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Plan loaded and validated successfully");

    // 顯示配置摘要
    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No artifacts will be written");
        perform_dry_run(&config)?;
        return Ok(());
    }

    // 決定監控設定
    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 創建存儲和管道
    let storage = LocalStorage::new(config.output_path().to_string());
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
            tracing::error!(
                "❌ Plan run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            std::process::exit(1);
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Plan summary:");
    println!("  Name:        {} (v{})", config.plan.name, config.plan.version);
    println!("  Description: {}", config.plan.description);
    println!("  Policies:    {}", config.policy.len());
    println!("  Output path: {}", config.output_path());
    if args.dry_run {
        println!("  Mode:        dry run");
    }
}

fn perform_dry_run(config: &TomlConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Dry run - evaluating {} policies:", config.policy.len());

    for policy in &config.policy {
        let eval = evaluate_policy(policy)?;
        println!("  {}", eval.summary());
    }

    println!("🔍 Dry run complete - no artifacts written");
    Ok(())
}
