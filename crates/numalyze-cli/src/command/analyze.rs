use std::path::PathBuf;

use clap::Args;
use numalyze_stats::descriptive::Analysis;

use crate::{schema::AnalysisRecord, util::Output};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct AnalyzeArg {
    /// Integer values to analyze (zero values yields the all-zero report)
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<i64>,

    /// Report format (text or json)
    #[arg(long, default_value = "text")]
    pub format: ReportFormat,

    /// Output file path (defaults to stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let analysis = Analysis::compute(&arg.values);
    let mut output = Output::from_output_path(arg.output.clone())?;
    match arg.format {
        ReportFormat::Text => output.write_text(&render_report(&analysis))?,
        ReportFormat::Json => output.write_json(&AnalysisRecord::from(&analysis))?,
    }
    Ok(())
}

fn render_report(analysis: &Analysis) -> String {
    format!(
        "Count: {count}\nMin: {min}\nMax: {max}\nMean: {mean}\nMedian: {median}\nStandard Deviation: {std_dev}\n",
        count = analysis.count,
        min = analysis.min,
        max = analysis.max,
        mean = analysis.mean,
        median = analysis.median,
        std_dev = analysis.std_dev,
    )
}
