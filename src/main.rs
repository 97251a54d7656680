use clap::Parser;

use linkdo::cli::{Cli, Commands, config_generate};
use linkdo::config::StaticConfig;
use linkdo::runtime::{ServiceKind, run_server};
use linkdo::system::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let kind = match cli.command {
        Commands::ConfigGen { output_path, force } => {
            if let Err(e) = config_generate(&output_path, force) {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
            return Ok(());
        }
        Commands::ShortUrl => ServiceKind::ShortUrl,
        Commands::Todo => ServiceKind::Todo,
    };

    let config = match StaticConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
    };

    // guard 必须存活到进程结束，否则日志不会刷新
    let _log_guard = match init_logging(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
    };

    run_server(kind, &config).await
}
