use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TARGET_COLUMN: &str = "futures_close_ZC_1";
pub const DEFAULT_DATE_COLUMN: &str = "date";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub head_rows: usize,
    pub max_display_rows: usize,
    pub max_display_cols: Option<usize>, // None prints every column
    pub target_column: String,
    pub date_column: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            head_rows: 5,
            max_display_rows: 100,
            max_display_cols: None,
            target_column: DEFAULT_TARGET_COLUMN.to_string(),
            date_column: DEFAULT_DATE_COLUMN.to_string(),
        }
    }
}

impl ReportConfig {
    pub fn with_target(mut self, column: &str) -> Self {
        self.target_column = column.to_string();
        self
    }

    /// Push the row/column limits into the polars table formatter.
    ///
    /// Polars reads these from the environment every time a frame is
    /// displayed, so this affects the whole process.
    pub fn apply_display_limits(&self) {
        let max_cols = self
            .max_display_cols
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-1".to_string());

        std::env::set_var("POLARS_FMT_MAX_ROWS", self.max_display_rows.to_string());
        std::env::set_var("POLARS_FMT_MAX_COLS", &max_cols);

        log::debug!(
            "Display limits: {} rows, {} columns",
            self.max_display_rows,
            max_cols
        );
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnProfile {
    pub name: String,
    pub dtype: String,
    pub missing: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TargetMissingness {
    pub column: String,
    pub missing: usize,
    pub total_rows: usize,
}

impl TargetMissingness {
    pub fn observed(&self) -> usize {
        self.total_rows - self.missing
    }

    pub fn missing_fraction(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            self.missing as f64 / self.total_rows as f64
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DateSpan {
    pub column: String,
    pub first: NaiveDate,
    pub last: NaiveDate,
    pub distinct_days: usize,
    pub gap_days: usize, // calendar days between first and last with no row
}

impl DateSpan {
    pub fn calendar_days(&self) -> usize {
        ((self.last - self.first).num_days() + 1) as usize
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub name: String,
    pub path: String,
    pub rows: usize,
    pub columns: usize,
    pub column_profiles: Vec<ColumnProfile>,
    pub target: Option<TargetMissingness>,
    pub date_span: Option<DateSpan>,
}

impl DatasetSummary {
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn total_missing(&self) -> usize {
        self.column_profiles.iter().map(|c| c.missing).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.head_rows, 5);
        assert_eq!(config.max_display_rows, 100);
        assert!(config.max_display_cols.is_none());
        assert_eq!(config.target_column, "futures_close_ZC_1");

        let config = config.with_target("yield");
        assert_eq!(config.target_column, "yield");
    }

    #[test]
    fn test_target_fraction() {
        let target = TargetMissingness {
            column: "futures_close_ZC_1".to_string(),
            missing: 1,
            total_rows: 4,
        };
        assert_eq!(target.observed(), 3);
        assert!((target.missing_fraction() - 0.25).abs() < 1e-12);

        let empty = TargetMissingness {
            column: "x".to_string(),
            missing: 0,
            total_rows: 0,
        };
        assert_eq!(empty.missing_fraction(), 0.0);
    }

    #[test]
    fn test_date_span_calendar_days() {
        let span = DateSpan {
            column: "date".to_string(),
            first: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            last: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            distinct_days: 8,
            gap_days: 2,
        };
        assert_eq!(span.calendar_days(), 10);
    }
}
