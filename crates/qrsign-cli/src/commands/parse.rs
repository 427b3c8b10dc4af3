//! `qrsign parse` — Parse a scanned payload and show its fields.

use clap::Args;

use super::read_payload;

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Payload text, path to a file containing it, or `-` for stdin.
    pub input: String,

    /// Print the parsed message as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &ParseArgs) -> anyhow::Result<()> {
    let raw = read_payload(&args.input)?;
    let signed = qrsign_core::parse(&raw)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&signed)?);
        return Ok(());
    }

    let message = signed.message();
    println!("Name:         {}", message.name());
    print!("Date:         {}", message.date());
    if message.calendar_date().is_none() {
        print!(" (not a calendar date)");
    }
    println!();
    println!("Key type:     {}", message.key_type());
    println!("Key location: {}", message.key_location());
    println!("Signature:    {}", signed.signature());
    Ok(())
}
