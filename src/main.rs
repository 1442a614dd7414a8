use clap::Parser;
use tf_diagram::utils::{logger, validation::Validate};
use tf_diagram::{CliConfig, DiagramPipeline, LocalStorage, ScanEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting tf-diagram CLI");
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

    // 建立存儲與管道
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = DiagramPipeline::new(storage, config);

    let engine = ScanEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Diagram pipeline completed successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Diagram pipeline completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Diagram pipeline failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                tf_diagram::utils::error::ErrorSeverity::Low => 0,
                tf_diagram::utils::error::ErrorSeverity::Medium => 2,
                tf_diagram::utils::error::ErrorSeverity::High => 1,
                tf_diagram::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
