use anyhow::{Context, Result};
use log::info;
use polars::prelude::*;
use std::path::Path;

/// Field values read as missing, on top of empty fields. Same list as the
/// pandas `read_csv` defaults.
pub const NULL_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Reads delimited text files with a header row into a `DataFrame`.
pub struct DataLoader {
    separator: u8,
    infer_schema_length: Option<usize>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            separator: b',',
            infer_schema_length: None,
        }
    }

    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    /// Limit type inference to the first `rows` rows. The default (`None`)
    /// scans the whole file, so a late float in an integer column still loads.
    pub fn with_infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = rows;
        self
    }

    /// Load a CSV file, failing on a missing file or any parse error.
    pub fn load(&self, path: &Path) -> Result<DataFrame> {
        if !path.is_file() {
            anyhow::bail!("CSV file not found: {}", path.display());
        }

        info!("Loading {}", path.display());

        let null_values = NullValues::AllColumns(NULL_TOKENS.iter().map(|t| (*t).into()).collect());
        let parse_options = CsvParseOptions::default()
            .with_separator(self.separator)
            .with_null_values(Some(null_values));

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(self.infer_schema_length)
            .with_parse_options(parse_options)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .and_then(|reader| reader.finish())
            .with_context(|| format!("Failed to read CSV file: {}", path.display()))?;

        info!(
            "Loaded {} rows x {} columns from {}",
            df.height(),
            df.width(),
            path.display()
        );

        Ok(df)
    }
}
