//! Angstrom CLI: the main entry point.
//!
//! Commands:
//! - `serve`   start the website HTTP gateway
//! - `chat`    talk to the chat agents from the terminal
//! - `doctor`  diagnose configuration and provider health

use std::path::PathBuf;

use angstrom_core::Mode;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "angstrom",
    about = "Applied Angstrom Technology website backend",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP gateway server
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,

        /// Config file (defaults to $ANGSTROM_CONFIG, then ./angstrom.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Chat with the website agents
    Chat {
        /// Send a single message instead of entering interactive mode
        #[arg(short, long)]
        message: Option<String>,

        /// Pin the agent instead of letting the router classify
        #[arg(short, long)]
        agent: Option<Mode>,

        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Diagnose configuration, content and provider health
    Doctor {
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Also send a health request to the provider
        #[arg(long)]
        ping: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Serve { port, config } => commands::serve::run(config, port).await?,
        Commands::Chat {
            message,
            agent,
            config,
        } => commands::chat::run(config, message, agent).await?,
        Commands::Doctor { config, ping } => commands::doctor::run(config, ping).await?,
    }

    Ok(())
}
