use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StripError {
    #[error("could not read source {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("could not write cleaned source {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[cfg(feature = "multi_thread")]
    #[error("could not list contracts in {}: {source}", .path.display())]
    ListDir { path: PathBuf, source: io::Error },
    #[error("could not read config {}: {source}", .path.display())]
    ConfigRead { path: PathBuf, source: io::Error },
    #[error("invalid JSON config: {0}")]
    JsonConfig(#[from] serde_json::Error),
    #[cfg(feature = "toml_config")]
    #[error("invalid TOML config: {0}")]
    TomlConfig(#[from] toml::de::Error),
    #[error("config {} has an unsupported format, use .json or .toml", .path.display())]
    UnsupportedFormat { path: PathBuf },
    #[error("config {} is TOML; rebuild with the 'toml_config' feature to load it", .path.display())]
    TomlNotEnabled { path: PathBuf },
}
