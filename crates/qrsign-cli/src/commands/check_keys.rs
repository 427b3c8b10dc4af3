//! `qrsign check-keys` — Check that a public key matches a private key.

use clap::Args;

#[derive(Args, Debug)]
pub struct CheckKeysArgs {
    /// Base64 Ed25519 public key.
    #[arg(long)]
    pub public_key: String,

    /// Base64 Ed25519 private key (32-byte seed or 64-byte keypair).
    #[arg(long)]
    pub private_key: String,
}

pub fn run(args: &CheckKeysArgs) -> anyhow::Result<()> {
    if qrsign_crypto::check_key_pair(&args.public_key, &args.private_key) {
        println!("Key pair OK");
        Ok(())
    } else {
        anyhow::bail!("public key does not match private key")
    }
}
