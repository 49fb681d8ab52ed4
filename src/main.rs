use clap::Parser;
use flexi_ads::app::{load_config, App};
use flexi_ads::config::toml_config::LogFormat;
use flexi_ads::utils::error::ErrorCategory;
use flexi_ads::utils::logger;
use flexi_ads::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 先讀配置，才知道要用哪一種日誌格式
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    match config.log_format() {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::debug!("Using API at {}", config.base_url());

    let app = App::new(&config)?;

    match app.run(cli.command).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Err(e) => {
            tracing::error!("❌ Command failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = match e.category() {
                ErrorCategory::Remote => 2,
                ErrorCategory::Network => 3,
                ErrorCategory::Configuration | ErrorCategory::Validation => 1,
                ErrorCategory::Storage | ErrorCategory::Internal => 4,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
