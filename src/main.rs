mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod http;
mod infra;
mod services;
mod workflow;

use clap::{Args, Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::AppResult;

#[derive(Parser)]
#[command(
    name = "gitbrief",
    author,
    version,
    about = "Proxy for GitHub commit history and Gemini commit summaries"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default).
    Serve(ServeArgs),
    /// Show the effective configuration (secrets masked).
    Config,
}

#[derive(Args, Default)]
struct ServeArgs {
    /// Override the listen port from PORT.
    #[arg(short, long)]
    port: Option<u16>,
    /// Override the listen address from BIND_ADDRESS.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .init();

    if let Err(err) = run().await {
        error!("{err}");
        std::process::exit(1);
    }
}

/// Directives from `RUST_LOG` when they parse, `info` otherwise.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    match cli.command.unwrap_or(Commands::Serve(ServeArgs::default())) {
        Commands::Config => {
            cmd::config::run(&config);
            Ok(())
        }
        Commands::Serve(args) => {
            if let Some(port) = args.port {
                config.port = port;
            }
            if let Some(bind) = args.bind {
                config.bind_address = bind;
            }
            cmd::serve::run(config).await
        }
    }
}
