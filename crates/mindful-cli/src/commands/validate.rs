use clap::Args;
use mindful_core::validate_sessions;
use std::path::PathBuf;

#[derive(Args)]
pub struct ValidateArgs {
    /// JSON file holding an array of session records ("-" for stdin)
    #[arg(short, long)]
    input: PathBuf,
}

pub fn run(args: ValidateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let sessions = super::load_sessions(&args.input)?;
    validate_sessions(&sessions)?;
    println!("ok ({} sessions)", sessions.len());
    Ok(())
}
