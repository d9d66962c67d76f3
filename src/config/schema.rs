//! Configuration schema.
//!
//! [`PipConfig`] maps to the YAML configuration file format. Every field has
//! a default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Default package-manager executable.
pub const DEFAULT_EXECUTABLE: &str = "pip";

/// Default release index URL template. `{}` is replaced by the package name.
pub const DEFAULT_INDEX_URL: &str = "https://pypi.org/pypi/{}/json";

/// Default HTTP timeout for release lookups, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding [`PipConfig::executable`].
pub const ENV_EXECUTABLE: &str = "PIP_HELPERS_PIP";

/// Environment variable overriding [`PipConfig::index_url`].
pub const ENV_INDEX_URL: &str = "PIP_HELPERS_INDEX_URL";

/// How to run the package manager and where to look up releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipConfig {
    /// Program to run (looked up on PATH unless it contains a separator).
    pub executable: String,

    /// Arguments placed before the subcommand, e.g. `["-m", "pip"]` when
    /// `executable` is a Python interpreter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub global_args: Vec<String>,

    /// Extra environment variables for the child process.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub env: HashMap<String, String>,

    /// Working directory for the child process.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,

    /// Release index URL template.
    pub index_url: String,

    /// HTTP timeout for release lookups.
    pub timeout_secs: u64,
}

impl Default for PipConfig {
    fn default() -> Self {
        Self {
            executable: DEFAULT_EXECUTABLE.to_string(),
            global_args: Vec::new(),
            env: HashMap::new(),
            cwd: None,
            index_url: DEFAULT_INDEX_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl PipConfig {
    /// Default configuration with environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Use `executable` as the package manager.
    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = executable.into();
        self
    }

    /// Use `index_url` as the release index URL template.
    pub fn with_index_url(mut self, index_url: impl Into<String>) -> Self {
        self.index_url = index_url.into();
        self
    }

    /// Apply `PIP_HELPERS_PIP` and `PIP_HELPERS_INDEX_URL`.
    ///
    /// Unset or empty variables leave the current value alone.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(exe) = lookup(ENV_EXECUTABLE).filter(|v| !v.is_empty()) {
            tracing::debug!("Using package manager from {}: {}", ENV_EXECUTABLE, exe);
            self.executable = exe;
        }
        if let Some(url) = lookup(ENV_INDEX_URL).filter(|v| !v.is_empty()) {
            tracing::debug!("Using index URL from {}: {}", ENV_INDEX_URL, url);
            self.index_url = url;
        }
    }
}
