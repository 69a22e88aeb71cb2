use crate::models::{DatasetSummary, DateSpan, ReportConfig};
use crate::profile::check_target_missingness;
use anyhow::Result;
use polars::prelude::*;
use serde::Serialize;
use std::io::Write;

const RULE_WIDTH: usize = 50;

#[derive(Serialize)]
struct JsonReport<'a> {
    config: &'a ReportConfig,
    datasets: &'a [DatasetSummary],
}

/// Writes human-readable and machine-readable summaries to any sink.
pub struct Reporter<W: Write> {
    out: W,
    config: ReportConfig,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, config: ReportConfig) -> Self {
        Self { out, config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    /// A title framed by two rules, preceded by a blank line.
    pub fn banner(&mut self, title: &str) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out, "\n{}", rule)?;
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "{}", rule)?;
        Ok(())
    }

    /// Print the shape tuple and the first `head_rows` rows.
    pub fn summarize(&mut self, label: &str, df: &DataFrame) -> Result<()> {
        self.banner(&format!("{} Shape: {:?}", label, df.shape()))?;
        writeln!(self.out, "{}", df.head(Some(self.config.head_rows)))?;
        Ok(())
    }

    /// Print the missing-target count when `column` exists; print nothing otherwise.
    pub fn report_target(&mut self, df: &DataFrame, column: &str) -> Result<Option<usize>> {
        let Some(target) = check_target_missingness(df, column) else {
            return Ok(None);
        };

        writeln!(self.out, "\nTarget column: {}", target.column)?;
        writeln!(
            self.out,
            "Rows with missing targets (to be predicted): {}",
            target.missing
        )?;
        writeln!(
            self.out,
            "Observed target rows: {} ({:.1}% missing)",
            target.observed(),
            target.missing_fraction() * 100.0
        )?;

        Ok(Some(target.missing))
    }

    pub fn report_date_span(&mut self, span: &DateSpan) -> Result<()> {
        writeln!(
            self.out,
            "Date range ({}): {} to {} ({} calendar days, {} with data, {} gap days)",
            span.column,
            span.first,
            span.last,
            span.calendar_days(),
            span.distinct_days,
            span.gap_days
        )?;
        Ok(())
    }

    pub fn write_json(&mut self, summaries: &[DatasetSummary]) -> Result<()> {
        let report = JsonReport {
            config: &self.config,
            datasets: summaries,
        };
        serde_json::to_writer_pretty(&mut self.out, &report)?;
        writeln!(self.out)?;
        Ok(())
    }

    /// One CSV row per column of every dataset.
    pub fn write_profile_csv(&mut self, summaries: &[DatasetSummary]) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(&mut self.out);
        wtr.write_record(["dataset", "column", "dtype", "missing"])?;

        for summary in summaries {
            for profile in &summary.column_profiles {
                wtr.write_record([
                    summary.name.as_str(),
                    profile.name.as_str(),
                    profile.dtype.as_str(),
                    profile.missing.to_string().as_str(),
                ])?;
            }
        }

        wtr.flush()?;
        Ok(())
    }
}
