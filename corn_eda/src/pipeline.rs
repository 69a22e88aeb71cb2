use crate::data_loader::DataLoader;
use crate::models::{DatasetSummary, ReportConfig};
use crate::paths::DatasetPaths;
use crate::profile::summarize_dataset;
use crate::reporter::Reporter;
use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub const MAIN_LABEL: &str = "Main Dataset";
pub const SHARE_LABEL: &str = "Market Share Dataset";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
    Csv,
}

/// Load both tables and report on them in the requested format.
///
/// Either file failing to load aborts the run before anything about the
/// tables is written.
pub fn run<W: Write>(
    paths: &DatasetPaths,
    loader: &DataLoader,
    config: ReportConfig,
    format: OutputFormat,
    out: W,
) -> Result<Vec<DatasetSummary>> {
    let mut reporter = Reporter::new(out, config);
    let main_path = paths.main_path();
    let share_path = paths.share_path();

    if format == OutputFormat::Summary {
        reporter.line("Loading data...")?;
    }

    let main_df = loader.load(&main_path)?;
    let share_df = loader.load(&share_path)?;
    let summaries = vec![
        summarize_dataset(MAIN_LABEL, &main_path, &main_df, reporter.config())?,
        summarize_dataset(SHARE_LABEL, &share_path, &share_df, reporter.config())?,
    ];
    for summary in &summaries {
        info!("{} loaded with shape {:?}", summary.name, summary.shape());
    }

    match format {
        OutputFormat::Summary => {
            reporter.line("Data loaded successfully.")?;

            reporter.summarize(MAIN_LABEL, &main_df)?;
            if let Some(span) = &summaries[0].date_span {
                reporter.report_date_span(span)?;
            }
            let target_column = reporter.config().target_column.clone();
            reporter.report_target(&main_df, &target_column)?;
            reporter.line(&format!(
                "Missing values across the main table: {}",
                summaries[0].total_missing()
            ))?;

            reporter.summarize(SHARE_LABEL, &share_df)?;
        }
        OutputFormat::Json => reporter.write_json(&summaries)?,
        OutputFormat::Csv => reporter.write_profile_csv(&summaries)?,
    }

    Ok(summaries)
}
