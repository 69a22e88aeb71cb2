use anyhow::Result;
use corn_eda::paths::{DatasetPaths, MAIN_FILE, SHARE_FILE};
use corn_eda::pipeline::{self, OutputFormat};
use corn_eda::{DataLoader, DatasetSummary, ReportConfig};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

fn select_paths(args: &[String]) -> DatasetPaths {
    if args.iter().any(|arg| arg == "--kaggle") {
        DatasetPaths::kaggle_default()
    } else if args.iter().any(|arg| arg == "--test") {
        DatasetPaths::new("test_data", MAIN_FILE, SHARE_FILE)
    } else {
        DatasetPaths::local_default()
    }
}

/// Run the overview for `paths`, writing the report to `out`.
fn run_overview<W: Write>(paths: &DatasetPaths, mut out: W) -> Result<Vec<DatasetSummary>> {
    writeln!(out, "🌽 Helios Corn Climate Challenge - Data Overview")?;
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out, "Main table:  {}", paths.main_path().display())?;
    writeln!(out, "Share table: {}", paths.share_path().display())?;
    writeln!(out)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?);
    pb.set_message("reading tables");
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = pipeline::run(
        paths,
        &DataLoader::new(),
        ReportConfig::default(),
        OutputFormat::Summary,
        &mut out,
    );
    pb.finish_and_clear();

    result
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let paths = select_paths(&args);

    ReportConfig::default().apply_display_limits();

    let stdout = io::stdout();
    run_overview(&paths, stdout.lock())?;

    println!("\n✅ Overview complete");
    Ok(())
}
