//! Column profiling: missingness counts and the span of the daily date axis.

use crate::models::{ColumnProfile, DatasetSummary, DateSpan, ReportConfig, TargetMissingness};
use anyhow::Result;
use chrono::NaiveDate;
use log::warn;
use polars::prelude::*;
use std::collections::BTreeSet;
use std::path::Path;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Number of missing entries in a column: nulls, plus NaN for float columns.
pub fn count_missing(series: &Series) -> usize {
    let nan_count = match series.dtype() {
        DataType::Float64 => series
            .f64()
            .map(|ca| ca.into_iter().flatten().filter(|v| v.is_nan()).count())
            .unwrap_or(0),
        DataType::Float32 => series
            .f32()
            .map(|ca| ca.into_iter().flatten().filter(|v| v.is_nan()).count())
            .unwrap_or(0),
        _ => 0,
    };

    series.null_count() + nan_count
}

pub fn column_profiles(df: &DataFrame) -> Vec<ColumnProfile> {
    df.get_columns()
        .iter()
        .map(|series| ColumnProfile {
            name: series.name().to_string(),
            dtype: series.dtype().to_string(),
            missing: count_missing(series),
        })
        .collect()
}

/// Missingness of the target column, or `None` when the table has no such column.
pub fn check_target_missingness(df: &DataFrame, column: &str) -> Option<TargetMissingness> {
    let series = df.column(column).ok()?;

    Some(TargetMissingness {
        column: column.to_string(),
        missing: count_missing(series),
        total_rows: df.height(),
    })
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    // Datetime strings: keep the calendar part
    let day_part = value.get(..10).unwrap_or(value);

    DATE_FORMATS.iter().find_map(|fmt| {
        NaiveDate::parse_from_str(value, fmt)
            .or_else(|_| NaiveDate::parse_from_str(day_part, fmt))
            .ok()
    })
}

/// First and last day of a date column, with the number of calendar days
/// inside that range that have no row.
pub fn date_span(df: &DataFrame, column: &str) -> Result<Option<DateSpan>> {
    let Ok(series) = df.column(column) else {
        return Ok(None);
    };

    let as_text = series.cast(&DataType::String)?;
    let mut days = BTreeSet::new();
    let mut unparsed = 0usize;

    for value in as_text.str()?.into_iter().flatten() {
        match parse_date(value) {
            Some(day) => {
                days.insert(day);
            }
            None => unparsed += 1,
        }
    }

    if unparsed > 0 {
        warn!("Skipped {} unparseable values in '{}'", unparsed, column);
    }

    let (Some(first), Some(last)) = (days.first().copied(), days.last().copied()) else {
        return Ok(None);
    };

    let calendar_days = (last - first).num_days() as usize + 1;

    Ok(Some(DateSpan {
        column: column.to_string(),
        first,
        last,
        distinct_days: days.len(),
        gap_days: calendar_days - days.len(),
    }))
}

pub fn summarize_dataset(
    name: &str,
    path: &Path,
    df: &DataFrame,
    config: &ReportConfig,
) -> Result<DatasetSummary> {
    let (rows, columns) = df.shape();

    Ok(DatasetSummary {
        name: name.to_string(),
        path: path.display().to_string(),
        rows,
        columns,
        column_profiles: column_profiles(df),
        target: check_target_missingness(df, &config.target_column),
        date_span: date_span(df, &config.date_column)?,
    })
}
