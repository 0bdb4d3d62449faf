use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    fs,
    path::{Path, PathBuf},
};

use crate::StripError;

pub const DEFAULT_INPUT: &str = "contracts/Web3TwinNFT_flattened_clean.sol";
pub const DEFAULT_OUTPUT: &str = "contracts/Web3TwinNFT_flattened_no_comments.sol";

/// Where to read from, where to write to, and whether the header before the
/// first pragma is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub keep_pragma_only: bool,
}

impl StripConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        StripConfig {
            input: input.into(),
            output: output.into(),
            keep_pragma_only: true,
        }
    }

    /// Loads a config from a file, or from inline JSON text.
    ///
    /// Anything that names an existing file, or ends in `.json`/`.toml`, is
    /// treated as a path, so a mistyped `strip.json` reports the missing file.
    pub fn from_config(config: &str) -> Result<StripConfig, StripError> {
        let path = Path::new(config);
        if path.is_file() || config_format(path).is_some() {
            Self::from_file(path)
        } else {
            Self::from_inline(config)
        }
    }

    pub fn from_file(path: &Path) -> Result<StripConfig, StripError> {
        let format = config_format(path).ok_or_else(|| StripError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
        let contents = fs::read_to_string(path).map_err(|source| StripError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        match format {
            ConfigFormat::Json => Ok(serde_json::from_str(&contents)?),
            #[cfg(feature = "toml_config")]
            ConfigFormat::Toml => Ok(toml::from_str(&contents)?),
            #[cfg(not(feature = "toml_config"))]
            ConfigFormat::Toml => Err(StripError::TomlNotEnabled {
                path: path.to_path_buf(),
            }),
        }
    }

    // JSON first; TOML only as a fallback, and a double failure reports the JSON error.
    fn from_inline(text: &str) -> Result<StripConfig, StripError> {
        let json_err = match serde_json::from_str(text) {
            Ok(config) => return Ok(config),
            Err(err) => err,
        };
        #[cfg(feature = "toml_config")]
        {
            if let Ok(config) = toml::from_str(text) {
                return Ok(config);
            }
        }
        Err(json_err.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

fn config_format(path: &Path) -> Option<ConfigFormat> {
    match path.extension()?.to_str()? {
        "json" => Some(ConfigFormat::Json),
        "toml" => Some(ConfigFormat::Toml),
        _ => None,
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        StripConfig::new(DEFAULT_INPUT, DEFAULT_OUTPUT)
    }
}

impl Display for StripConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", json)
    }
}
