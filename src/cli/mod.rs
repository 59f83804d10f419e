// src/cli/mod.rs — CLI definition (clap derive)

pub mod export;
pub mod serve;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "findash", about = "Company performance dashboard", version)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the dashboard over HTTP (default)
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,
        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,
        /// Force debug mode (request tracing, debug logs)
        #[arg(long)]
        debug: bool,
    },
    /// Write the dashboard data without starting a server
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Every tab's figure as JSON
    Json,
    /// Every tab's figure as YAML
    Yaml,
    /// The metrics table as CSV
    Csv,
    /// The standalone dashboard page
    Html,
}
