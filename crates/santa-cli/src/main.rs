mod cmd;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "amic",
    about = "Amic Invisible — run the draw, hand out personal links, notify everyone",
    version,
    propagate_version = true
)]
struct Cli {
    /// Participant configuration file
    #[arg(long, global = true, env = "AMIC_CONFIG", default_value = "config.yaml")]
    config: PathBuf,

    /// Directory holding the data/ records
    #[arg(long, global = true, env = "AMIC_ROOT", default_value = ".")]
    root: PathBuf,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the draw if needed, notify fresh links, and serve the pages
    Serve {
        /// Port to listen on
        #[arg(long, env = "PORT", default_value = "3000")]
        port: u16,

        /// Base URL used when building personal links
        #[arg(long, env = "PUBLIC_URL", default_value = "http://localhost:3000")]
        public_url: String,

        /// Skip the notification batch even when the draw is fresh
        #[arg(long)]
        no_notify: bool,
    },

    /// Run the assignment draw without serving
    Draw,

    /// Print every participant's personal link
    Links {
        /// Base URL used when building personal links
        #[arg(long, env = "PUBLIC_URL", default_value = "http://localhost:3000")]
        public_url: String,
    },

    /// Send (or re-send) the personal links over SMS
    Notify {
        /// Base URL used when building personal links
        #[arg(long, env = "PUBLIC_URL", default_value = "http://localhost:3000")]
        public_url: String,
    },

    /// Validate the participant configuration
    Check,
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Serve {
            port,
            public_url,
            no_notify,
        } => cmd::serve::run(&cli.root, &cli.config, port, &public_url, no_notify),
        Commands::Draw => cmd::draw::run(&cli.root, &cli.config, cli.json),
        Commands::Links { public_url } => {
            cmd::links::run(&cli.root, &cli.config, &public_url, cli.json)
        }
        Commands::Notify { public_url } => {
            cmd::notify::run(&cli.root, &cli.config, &public_url, cli.json)
        }
        Commands::Check => cmd::check::run(&cli.config, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
