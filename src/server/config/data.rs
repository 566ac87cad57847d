use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_REASONS_FILE: &str = "reasons.json";
pub const DEFAULT_QUOTES_FILE: &str = "quotes.json";

/// Data directory shipped with the crate.
pub fn bundled_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Resolved locations of the provider files.
#[derive(Debug, Clone)]
pub struct DataSection {
    pub dir: PathBuf,
    pub reasons_path: PathBuf,
    pub quotes_path: PathBuf,
}

impl DataSection {
    pub fn in_dir(dir: PathBuf) -> Self {
        Self {
            reasons_path: dir.join(DEFAULT_REASONS_FILE),
            quotes_path: dir.join(DEFAULT_QUOTES_FILE),
            dir,
        }
    }
}

impl Default for DataSection {
    fn default() -> Self {
        Self::in_dir(bundled_data_dir())
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawDataSection {
    pub dir: Option<PathBuf>,
    pub reasons_file: Option<PathBuf>,
    pub quotes_file: Option<PathBuf>,
}

/// Resolve `[data]`. A relative `dir` is taken from the config file's directory;
/// file names are relative to `dir`.
pub fn parse_data_section(
    raw: Option<RawDataSection>,
    path: &Path,
) -> Result<DataSection, ConfigError> {
    let data_raw = raw.unwrap_or_default();

    let dir = match data_raw.dir {
        Some(dir) => {
            validate_non_empty(&dir, "data.dir", path)?;
            relative_to_config(path, dir)
        }
        None => bundled_data_dir(),
    };

    let reasons_file = data_raw
        .reasons_file
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REASONS_FILE));
    validate_non_empty(&reasons_file, "data.reasons_file", path)?;

    let quotes_file = data_raw
        .quotes_file
        .unwrap_or_else(|| PathBuf::from(DEFAULT_QUOTES_FILE));
    validate_non_empty(&quotes_file, "data.quotes_file", path)?;

    Ok(DataSection {
        reasons_path: dir.join(reasons_file),
        quotes_path: dir.join(quotes_file),
        dir,
    })
}

fn relative_to_config(config_path: &Path, dir: PathBuf) -> PathBuf {
    if dir.is_absolute() {
        return dir;
    }
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(dir),
        _ => dir,
    }
}

fn validate_non_empty(value: &Path, field: &'static str, path: &Path) -> Result<(), ConfigError> {
    if !value.as_os_str().is_empty() {
        return Ok(());
    }
    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field,
        message: "Path cannot be empty".into(),
    })
}
