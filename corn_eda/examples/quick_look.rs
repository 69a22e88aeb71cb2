use corn_eda::{profile, ReportConfig, Reporter};
use polars::prelude::*;

fn main() -> anyhow::Result<()> {
    // A week of daily closes, the last two still to be forecast
    let df = df!(
        "date" => &["2024-03-04", "2024-03-05", "2024-03-06", "2024-03-07", "2024-03-08"],
        "futures_close_ZC_1" => &[Some(431.5), Some(433.25), Some(429.0), None, None],
        "precip_mm" => &[0.0, 2.4, 11.8, 0.3, 0.0],
    )?;

    let config = ReportConfig::default();
    let mut reporter = Reporter::new(std::io::stdout(), config.clone());

    reporter.summarize("Main Dataset", &df)?;
    reporter.report_target(&df, &config.target_column)?;

    if let Some(span) = profile::date_span(&df, &config.date_column)? {
        reporter.report_date_span(&span)?;
    }

    Ok(())
}
