use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "mindful-cli", version, about = "Mindful Insights CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a session history and print insights
    Analyze(commands::analyze::AnalyzeArgs),
    /// Check session records without analyzing them
    Validate(commands::validate::ValidateArgs),
    /// Print recommendations for a set of insights
    Recommend(commands::recommend::RecommendArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Validate(args) => commands::validate::run(args),
        Commands::Recommend(args) => commands::recommend::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
