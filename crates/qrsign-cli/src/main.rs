//! QRSign CLI — sign and verify identity claims carried in QR codes.
//!
//! Subcommands: init, parse, scrape, verify, sign, check-keys.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use config::{LogFormat, LoggingConfig, QrSignConfig};

/// QRSign — signed identity claims in QR codes.
#[derive(Parser, Debug)]
#[command(name = "qrsign", version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, global = true, default_value = "qrsign.toml")]
    config: PathBuf,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default configuration file.
    Init(commands::init::InitArgs),
    /// Parse a scanned payload and show its fields.
    Parse(commands::parse::ParseArgs),
    /// Fetch a payload's key location and extract the published key.
    Scrape(commands::scrape::ScrapeArgs),
    /// Verify a scanned payload against its published key.
    Verify(commands::verify::VerifyArgs),
    /// Sign a claim and print the QR payload.
    Sign(commands::sign::SignArgs),
    /// Check that a public key matches a private key.
    CheckKeys(commands::check_keys::CheckKeysArgs),
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = QrSignConfig::load(&cli.config)?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    init_tracing(&config.logging);

    match &cli.command {
        Commands::Init(args) => commands::init::run(args, &cli.config),
        Commands::Parse(args) => commands::parse::run(args),
        Commands::Scrape(args) => commands::scrape::run(args, &config).await,
        Commands::Verify(args) => commands::verify::run(args, &config).await,
        Commands::Sign(args) => commands::sign::run(args),
        Commands::CheckKeys(args) => commands::check_keys::run(args),
    }
}
