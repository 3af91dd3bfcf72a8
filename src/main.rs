//! Main entry point for the Bhasha translator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod core;
mod processors;

use cli::commands::Commands;

/// Bhasha Translator - multi-provider translation fallback pipeline
#[derive(Parser, Debug)]
#[command(name = "bhasha", version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("bhasha_translator={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Execute command
    match args.command {
        Some(Commands::Text { input, target_lang }) => {
            cli::commands::handle_text(input, target_lang).await?;
        }
        Some(Commands::Batch { file, target_lang }) => {
            cli::commands::handle_batch(file, target_lang).await?;
        }
        Some(Commands::File {
            file,
            output,
            target_lang,
            recursive,
        }) => {
            cli::commands::handle_file(file, output, target_lang, recursive).await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
