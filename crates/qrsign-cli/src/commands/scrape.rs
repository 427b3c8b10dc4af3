//! `qrsign scrape` — Fetch a payload's key location and extract the key.

use clap::Args;
use std::path::PathBuf;

use qrsign_identity::KeyExtractor;

use super::{page_reader, read_payload};
use crate::config::QrSignConfig;

#[derive(Args, Debug)]
pub struct ScrapeArgs {
    /// Payload text, path to a file containing it, or `-` for stdin.
    pub input: String,

    /// Read the key location's content from this file instead of fetching it.
    #[arg(long)]
    pub page: Option<PathBuf>,

    /// Also print the fetched page content.
    #[arg(long)]
    pub show_content: bool,
}

pub async fn run(args: &ScrapeArgs, config: &QrSignConfig) -> anyhow::Result<()> {
    let raw = read_payload(&args.input)?;
    let signed = qrsign_core::parse(&raw)?;

    let reader = page_reader(&signed, &config.profile, &config.fetch, args.page.as_deref())?;
    let extractor = KeyExtractor::with_profile_source(reader, config.profile.clone())?;
    let scrape = extractor.extract(&signed).await?;

    println!("Key location: {}", signed.message().key_location());
    println!("Public key:   {}", scrape.key);
    println!("Badge:        {}", scrape.is_verified);
    if args.show_content {
        println!();
        println!("{}", scrape.page_content);
    }
    Ok(())
}
