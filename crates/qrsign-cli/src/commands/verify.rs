//! `qrsign verify` — Verify a scanned payload against its published key.

use clap::Args;
use std::path::PathBuf;

use qrsign_identity::{validate_with_key, KeyExtractor, QrValidator, ValidationReport};

use super::{page_reader, read_payload};
use crate::config::QrSignConfig;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Payload text, path to a file containing it, or `-` for stdin.
    pub input: String,

    /// Verify against this base64 public key instead of the published one.
    #[arg(short, long, conflicts_with = "page")]
    pub key: Option<String>,

    /// Read the key location's content from this file instead of fetching it.
    #[arg(long)]
    pub page: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: &VerifyArgs, config: &QrSignConfig) -> anyhow::Result<()> {
    let raw = read_payload(&args.input)?;
    let signed = qrsign_core::parse(&raw)?;

    let report = match &args.key {
        Some(key) => validate_with_key(signed, key),
        None => {
            let reader =
                page_reader(&signed, &config.profile, &config.fetch, args.page.as_deref())?;
            let extractor = KeyExtractor::with_profile_source(reader, config.profile.clone())?;
            QrValidator::new(extractor).validate_signed(signed).await?
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if !report.result.is_well_signed {
        anyhow::bail!("signature does not match the claimed key");
    }
    Ok(())
}

fn print_report(report: &ValidationReport) {
    let message = report.message.message();
    if report.result.is_well_signed {
        println!("Signature is VALID");
    } else {
        println!("Signature is INVALID");
    }
    println!();
    println!("  Name:         {}", message.name());
    println!("  Date:         {}", message.date());
    println!("  Key location: {}", message.key_location());
    if let Some(ref scrape) = report.scrape {
        println!("  Public key:   {}", scrape.key);
    }
    println!("  Badge:        {}", report.result.is_verified);
}
