use anyhow::Result;
use clap::{Parser, ValueEnum};
use corn_eda::{paths, DataLoader, DatasetPaths, OutputFormat, ReportConfig};
use log::info;
use std::io;

#[derive(Parser)]
#[command(name = "corn_eda")]
#[command(about = "Summarize the Helios corn climate master and market-share tables")]
struct Args {
    /// Base directory the data files are resolved against
    #[arg(long, default_value = ".")]
    base_dir: String,

    /// Use the Kaggle competition input directory as the base
    #[arg(long, conflicts_with = "base_dir")]
    kaggle: bool,

    /// Daily climate/futures master table
    #[arg(long, default_value = paths::MAIN_FILE)]
    main_file: String,

    /// Regional market-share table
    #[arg(long, default_value = paths::SHARE_FILE)]
    share_file: String,

    /// Column whose missing values mark rows to forecast
    #[arg(long, default_value = corn_eda::models::DEFAULT_TARGET_COLUMN)]
    target_col: String,

    /// Column holding the daily date axis
    #[arg(long, default_value = corn_eda::models::DEFAULT_DATE_COLUMN)]
    date_col: String,

    /// Rows shown in each table preview
    #[arg(long, default_value = "5")]
    head_rows: usize,

    /// Maximum rows the table formatter prints
    #[arg(long, default_value = "100")]
    max_rows: usize,

    /// Maximum columns the table formatter prints (all when omitted)
    #[arg(long)]
    max_cols: Option<usize>,

    /// Field separator
    #[arg(long, default_value = ",")]
    separator: char,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    output: Format,
}

#[derive(Clone, ValueEnum)]
enum Format {
    Summary,
    Json,
    Csv,
}

fn separator_byte(separator: char) -> Result<u8> {
    if !separator.is_ascii() {
        anyhow::bail!("Separator must be a single ASCII character, got '{}'", separator);
    }
    Ok(separator as u8)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let separator = separator_byte(args.separator)?;

    let base_dir = if args.kaggle {
        paths::KAGGLE_INPUT_DIR.to_string()
    } else {
        args.base_dir
    };
    let dataset_paths = DatasetPaths::new(&base_dir, &args.main_file, &args.share_file);
    info!(
        "Main table: {}, share table: {}",
        dataset_paths.main_path().display(),
        dataset_paths.share_path().display()
    );

    let config = ReportConfig {
        head_rows: args.head_rows,
        max_display_rows: args.max_rows,
        max_display_cols: args.max_cols,
        target_column: args.target_col,
        date_column: args.date_col,
    };
    config.apply_display_limits();

    let format = match args.output {
        Format::Summary => OutputFormat::Summary,
        Format::Json => OutputFormat::Json,
        Format::Csv => OutputFormat::Csv,
    };

    let loader = DataLoader::new().with_separator(separator);
    let stdout = io::stdout();
    corn_eda::pipeline::run(&dataset_paths, &loader, config, format, stdout.lock())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_flag() {
        let args = Args::try_parse_from(["corn_eda", "--separator", ";"]).unwrap();
        assert_eq!(separator_byte(args.separator).unwrap(), b';');

        let args = Args::try_parse_from(["corn_eda"]).unwrap();
        assert_eq!(separator_byte(args.separator).unwrap(), b',');

        assert!(separator_byte('§').is_err());
    }

    #[test]
    fn test_kaggle_conflicts_with_base_dir() {
        assert!(Args::try_parse_from(["corn_eda", "--kaggle"]).is_ok());
        assert!(Args::try_parse_from(["corn_eda", "--kaggle", "--base-dir", "/data"]).is_err());
    }
}
