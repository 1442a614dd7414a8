use anyhow::Context;
use clap::Parser;
use tf_diagram::utils::{logger, validation::Validate};
use tf_diagram::{DiagramPipeline, LocalStorage, ScanEngine, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-diagram")]
#[command(about = "Terraform diagram pipeline driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "diagram-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override archive setting from config
    #[arg(long)]
    archive: Option<bool>,

    /// Dry run - show what would be processed without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based diagram tool");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    // 應用命令列覆蓋設定
    if let Some(archive) = args.archive {
        config.load.compression = Some(tf_diagram::config::toml_config::CompressionConfig {
            enabled: archive,
        });
        tracing::info!("🔧 Archive overridden to: {}", archive);
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    // 驗證配置
    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if args.dry_run {
        println!("🔎 Dry run - nothing will be written");
        println!("  Pipeline:       {}", config.pipeline.name);
        println!("  Scan directory: {}", config.source.root);
        println!("  Output path:    {}", config.load.output_path);
        println!("  Formats:        {}", config.load.output_formats.join(", "));
        println!("  Archive:        {}", config.compression_enabled());
        return Ok(());
    }

    let storage = LocalStorage::new(config.load.output_path.clone());
    let pipeline = DiagramPipeline::new(storage, config);
    let engine = ScanEngine::new_with_monitoring(pipeline, monitor_enabled);

    let output_path = engine
        .run()
        .await
        .context("Diagram pipeline failed")?;

    println!("✅ Diagram pipeline completed successfully!");
    println!("📁 Output saved to: {}", output_path);

    Ok(())
}
