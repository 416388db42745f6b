use anyhow::Context as _;
use clap::Parser;
use script_tour::domain::ports::TourSettings;
use script_tour::utils::error::ErrorSeverity;
use script_tour::utils::{logger, validation::Validate};
use script_tour::{CliConfig, Host, Runner, TomlConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入 TOML 配置（如有指定）
    let file_config = match &cli.config {
        Some(path) => Some(
            TomlConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path.display()))?,
        ),
        None => None,
    };

    // 初始化日誌
    let verbose = cli.verbose || file_config.as_ref().is_some_and(|c| c.verbose_logging());
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting script-tour");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match file_config {
        Some(mut config) => {
            tracing::info!("📁 Using tour '{}' from config file", config.name());
            config.apply_overrides(&cli);
            execute(config)
        }
        None => execute(cli),
    }
}

fn execute<S: TourSettings + Validate>(settings: S) -> anyhow::Result<()> {
    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if settings.monitoring_enabled() {
        tracing::info!("🔍 Process monitoring enabled");
    }

    let mut runner = Runner::new(settings, Host::system());

    match runner.run() {
        Ok(summary) => {
            tracing::info!(
                "✅ {} section(s) completed in {:?}",
                summary.sections.len(),
                summary.elapsed
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Tour aborted: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
