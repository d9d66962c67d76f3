//! Configuration file loading.

use crate::config::schema::PipConfig;
use crate::error::{PipError, Result};
use std::fs;
use std::path::Path;

/// Load a single config file and parse it into [`PipConfig`].
///
/// Environment overrides are not applied; see [`load_config`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<PipConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PipError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PipError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into [`PipConfig`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<PipConfig> {
    // An empty document deserializes as null rather than an empty map.
    if content.trim().is_empty() {
        return Ok(PipConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| PipError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file and apply environment overrides on top of it.
pub fn load_config(path: &Path) -> Result<PipConfig> {
    let mut config = load_config_file(path)?;
    config.apply_env_overrides();
    Ok(config)
}
