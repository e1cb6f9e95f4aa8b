use clap::Args;
use mindful_core::{recommend, AnalysisReport, AnalyticsConfig, FailurePolicy, InsightEngine};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// JSON file holding an array of session records ("-" for stdin)
    #[arg(short, long)]
    input: PathBuf,
    /// Fail if any dimension cannot be computed
    #[arg(long)]
    strict: bool,
    /// Append recommendations to the output
    #[arg(long)]
    with_recommendations: bool,
}

#[derive(Serialize)]
struct AnalyzeOutput {
    #[serde(flatten)]
    report: AnalysisReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    recommendations: Option<Vec<String>>,
}

pub fn run(args: AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AnalyticsConfig::load()?;
    if args.strict {
        config.engine.failure_policy = FailurePolicy::Strict;
    }

    let sessions = super::load_sessions(&args.input)?;
    let report = InsightEngine::with_config(config).analyze(&sessions)?;

    let recommendations = args
        .with_recommendations
        .then(|| recommend(&report.insights));
    let output = AnalyzeOutput {
        report,
        recommendations,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
