//! `qrsign sign` — Sign a claim and print the QR payload.

use clap::Args;

use qrsign_core::Message;
use qrsign_crypto::{sign_message, KeyPair};

#[derive(Args, Debug)]
pub struct SignArgs {
    /// Name the claim is made for.
    #[arg(short, long)]
    pub name: String,

    /// Key location: an `http(s)://` URL or `FB:<profile>`.
    #[arg(short, long)]
    pub location: String,

    /// Base64 Ed25519 private key (32-byte seed or 64-byte keypair).
    #[arg(short, long)]
    pub private_key: String,

    /// Claim date, YYYY-MM-DD. Defaults to today.
    #[arg(short, long)]
    pub date: Option<String>,
}

pub fn run(args: &SignArgs) -> anyhow::Result<()> {
    let date = args
        .date
        .clone()
        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());

    let message = Message::new(args.name.as_str(), date, args.location.as_str())?;
    let keypair = KeyPair::from_base64(&args.private_key)
        .map_err(|e| anyhow::anyhow!("invalid private key: {}", e))?;

    let signed = sign_message(message, &keypair)?;
    tracing::info!(
        name = signed.message().name(),
        public_key = %keypair.public_key().to_base64(),
        "signed message"
    );
    println!("{}", signed.to_wire());
    Ok(())
}
