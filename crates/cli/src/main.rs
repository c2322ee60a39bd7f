mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "request-detect")]
#[command(about = "Classify HTTP requests with named detectors")]
#[command(version)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single request
    Classify {
        /// Raw query string, e.g. "dialog_action=1&id=4"
        #[arg(short, long, default_value = "")]
        query: String,

        /// Route parameter as KEY=VALUE; VALUE is read as a JSON scalar when possible
        #[arg(short, long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,

        /// Evaluate only this detector
        #[arg(short, long)]
        detector: Option<String>,

        /// Output format (default: from config, else text)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Path to config file (default: .request-detect.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Classify every request in a JSON-lines file
    Batch {
        /// File with one {"query": {...}, "params": {...}} object per line
        path: PathBuf,

        /// Output format (default: from config, else text)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Path to config file (default: .request-detect.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// List all available detectors
    List {
        /// Path to config file (default: .request-detect.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Generate a default .request-detect.toml config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(ValueEnum, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Classify {
            query,
            params,
            detector,
            format,
            config,
            no_color,
        } => commands::classify::run(&query, &params, detector, format, config, no_color),
        Commands::Batch {
            path,
            format,
            config,
            no_color,
        } => commands::batch::run(&path, format, config, no_color),
        Commands::List { config } => commands::list::run(config),
        Commands::Init { force } => commands::init::run(force),
    }
}
