pub mod data_loader;
pub mod models;
pub mod paths;
pub mod pipeline;
pub mod profile;
pub mod reporter;

pub use data_loader::DataLoader;
pub use models::{ColumnProfile, DatasetSummary, DateSpan, ReportConfig, TargetMissingness};
pub use paths::DatasetPaths;
pub use pipeline::OutputFormat;
pub use reporter::Reporter;
