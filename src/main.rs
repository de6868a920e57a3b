//! Bundle loader command line
//!
//! Main application entry point

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use bundle_loader::{
    config::Settings,
    i18n::{LoadConfig, LoadOutcome, MessageBundle},
    services::{create_fetcher, create_loader},
    utils::logging,
};

#[derive(Parser, Debug)]
#[command(name = "bundle-loader", version, about = "Resolve and load .properties message bundles")]
struct Cli {
    /// Configuration file (defaults to ./bundle-loader.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the identifier a reference normalizes to
    Normalize {
        /// Bundle reference; omit for the default bundle
        reference: Option<String>,
    },
    /// Load a bundle and print its messages
    Load {
        /// Bundle reference; omit for the default bundle
        reference: Option<String>,

        /// Resolve in build mode (no fetch)
        #[arg(long)]
        build: bool,

        /// Print a single message
        #[arg(long)]
        key: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Properties)]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Properties,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let settings = match cli.config {
        Some(ref path) => Settings::from_file(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => Settings::new().context("failed to load configuration")?,
    };
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    let loader = create_loader(&settings);

    match cli.cmd {
        Command::Normalize { reference } => {
            let id = loader.normalize_for_cache(reference.as_deref())?;
            println!("{}", id);
        }
        Command::Load { reference, build, key, format } => {
            let mut config = LoadConfig { mode: settings.loader.mode };
            if build {
                config = LoadConfig::build();
            }

            let fetcher = create_fetcher(&settings.fetch)?;
            let outcome = loader
                .load(reference.as_deref(), &*fetcher, &config)
                .await?;

            match outcome {
                LoadOutcome::Deferred => {
                    info!("Build mode: nothing fetched");
                }
                LoadOutcome::Loaded(bundle) => print_bundle(&bundle, key.as_deref(), format)?,
            }
        }
    }

    Ok(())
}

fn print_bundle(bundle: &MessageBundle, key: Option<&str>, format: OutputFormat) -> anyhow::Result<()> {
    if let Some(key) = key {
        let message = bundle
            .get(key)
            .with_context(|| format!("no message for key '{}'", key))?;
        println!("{}", message);
        return Ok(());
    }

    match format {
        OutputFormat::Properties => print!("{}", bundle.to_properties()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(bundle)?),
    }
    Ok(())
}
