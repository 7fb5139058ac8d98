//! BeatFlow server binary

use beatflow::config::Config;
use beatflow::server;
use beatflow::utils::logging::init_logging;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Prompt-to-music HTTP service
#[derive(Debug, Parser)]
#[command(name = "beatflow-server", version, about)]
struct Cli {
    /// YAML configuration file; environment variables override it
    #[arg(long, env = "BEATFLOW_CONFIG", default_value = "config/beatflow.yaml")]
    config: PathBuf,

    /// Bind address, overrides HOST
    #[arg(long)]
    host: Option<String>,

    /// Bind port, overrides PORT
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let mut config = match Config::load(Some(cli.config.as_path())).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.apply_server_overrides(cli.host, cli.port) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let build = beatflow::build_info();
    info!(version = build.version, git = build.git_hash, "BeatFlow build");

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
