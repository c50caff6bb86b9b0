//! Alumnet CLI: the main entry point.
//!
//! Commands:
//! - `serve`: Start the HTTP chatbot server
//! - `ask`: Answer one question and print the reply
//! - `context`: Print the prompt that would be sent to the model
//! - `seed`: Import a JSON fixture into the SQLite store
//! - `doctor`: Diagnose configuration, store, and model access

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "alumnet",
    about = "Alumnet — alumni network assistant",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    /// Path to the config file (defaults to $ALUMNET_CONFIG, then ./alumnet.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Ask a single question and print the reply
    Ask {
        /// The question to send
        #[arg(short, long)]
        message: String,
    },

    /// Print the assembled prompt without calling the model
    Context {
        /// Question to include in the user message
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Import a JSON fixture into the SQLite store
    Seed {
        /// Fixture file: { "<collection>": [ {document}, ... ] }
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,
    },

    /// Diagnose system health
    Doctor,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.json_logs || production_env());

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Serve { port } => commands::serve::run(config_path, port).await?,
        Commands::Ask { message } => commands::ask::run(config_path, &message).await?,
        Commands::Context { message } => {
            commands::context::run(config_path, message.as_deref()).await?
        }
        Commands::Seed { file } => commands::seed::run(config_path, &file).await?,
        Commands::Doctor => commands::doctor::run(config_path).await?,
    }

    Ok(())
}

fn production_env() -> bool {
    std::env::var("APP_ENV").is_ok_and(|env| env.eq_ignore_ascii_case("production"))
}

fn init_tracing(verbose: bool, json: bool) {
    let filter = if verbose { "debug" } else { "info" };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
