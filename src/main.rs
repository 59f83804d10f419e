// src/main.rs — findash entry point

use clap::Parser;

use findash::cli::{Cli, Commands};
use findash::infra::config::Config;
use findash::infra::logger;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };

    match cli.command {
        Some(Commands::Export { format, output }) => {
            logger::init_logging("warn");
            findash::cli::export::run_export(format, output.as_deref(), &config)
        }
        Some(Commands::Serve { host, port, debug }) => {
            let config = config.with_overrides(host, port, debug);
            logger::init_logging(logger::level_for(config.server.debug));
            findash::cli::serve::run_serve(&config).await
        }
        None => {
            logger::init_logging(logger::level_for(config.server.debug));
            findash::cli::serve::run_serve(&config).await
        }
    }
}
