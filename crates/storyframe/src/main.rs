//! storyframe CLI binary.
//!
//! - Extract frames from a script through a completion service
//! - Preview how a script would be segmented
//! - Parse frame lists and marked scripts locally

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, extract, parse_file, plan_file, revise};

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "info" }));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.json_logs {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let config = cli::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Extract {
            file,
            frames,
            format,
        } => {
            extract(&file, frames, format, &config).await?;
        }

        Commands::Plan { file, frames } => {
            plan_file(&file, frames, &config)?;
        }

        Commands::Parse {
            file,
            max,
            per_page,
        } => {
            parse_file(&file, max, per_page)?;
        }

        Commands::Revise { file, format } => {
            revise(&file, format, &config).await?;
        }
    }

    Ok(())
}
