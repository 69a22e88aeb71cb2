use std::path::{Path, PathBuf, MAIN_SEPARATOR};

pub const KAGGLE_INPUT_DIR: &str =
    "/kaggle/input/forecasting-the-future-the-helios-corn-climate-challenge/";
pub const MAIN_FILE: &str = "data/corn_climate_risk_futures_daily_master.csv";
pub const SHARE_FILE: &str = "data/corn_regional_market_share.csv";

/// Locations of the two competition tables.
#[derive(Debug, Clone)]
pub struct DatasetPaths {
    pub base_dir: PathBuf,
    pub main_file: PathBuf,
    pub share_file: PathBuf,
}

impl DatasetPaths {
    pub fn new(base_dir: impl AsRef<Path>, main_file: &str, share_file: &str) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            main_file: normalize_separators(main_file),
            share_file: normalize_separators(share_file),
        }
    }

    /// Files relative to the current directory, as laid out in a local checkout.
    pub fn local_default() -> Self {
        Self::new(".", MAIN_FILE, SHARE_FILE)
    }

    /// Files under the read-only Kaggle input mount.
    pub fn kaggle_default() -> Self {
        Self::new(KAGGLE_INPUT_DIR, MAIN_FILE, SHARE_FILE)
    }

    pub fn main_path(&self) -> PathBuf {
        resolve(&self.base_dir, &self.main_file)
    }

    pub fn share_path(&self) -> PathBuf {
        resolve(&self.base_dir, &self.share_file)
    }
}

/// Rewrite both `/` and `\` to the platform separator.
pub fn normalize_separators(path: &str) -> PathBuf {
    let normalized: String = path
        .chars()
        .map(|c| if c == '\\' || c == '/' { MAIN_SEPARATOR } else { c })
        .collect();
    PathBuf::from(normalized)
}

fn resolve(base_dir: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        base_dir.join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backslash_paths_are_normalized() {
        let path = normalize_separators(r"data\corn_regional_market_share.csv");
        let parts: Vec<_> = path.components().collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(path.file_name().unwrap(), "corn_regional_market_share.csv");
    }

    #[test]
    fn test_relative_files_join_base() {
        let paths = DatasetPaths::new("/tmp/helios", r"data\main.csv", "data/share.csv");
        assert_eq!(paths.main_path(), Path::new("/tmp/helios").join("data").join("main.csv"));
        assert_eq!(paths.share_path(), Path::new("/tmp/helios").join("data").join("share.csv"));
    }

    #[test]
    fn test_absolute_file_ignores_base() {
        let paths = DatasetPaths::new("/tmp/helios", "/srv/main.csv", "share.csv");
        assert_eq!(paths.main_path(), PathBuf::from("/srv/main.csv"));
    }

    #[test]
    fn test_kaggle_default() {
        let paths = DatasetPaths::kaggle_default();
        assert!(paths.main_path().starts_with(KAGGLE_INPUT_DIR));
        assert!(paths
            .share_path()
            .ends_with(Path::new("data").join("corn_regional_market_share.csv")));
    }
}
