use clap::Args;
use mindful_core::{recommend, Insight};
use std::path::PathBuf;

#[derive(Args)]
pub struct RecommendArgs {
    /// JSON file holding an array of insights ("-" for stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,
}

pub fn run(args: RecommendArgs) -> Result<(), Box<dyn std::error::Error>> {
    let insights: Vec<Insight> = match args.input {
        Some(path) => serde_json::from_str(&super::read_input(&path)?)?,
        None => Vec::new(),
    };
    println!("{}", serde_json::to_string_pretty(&recommend(&insights))?);
    Ok(())
}
