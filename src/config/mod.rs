//! Configuration for running the package manager.
//!
//! - Schema and defaults in [`schema`]
//! - YAML file loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use pip_helpers::config::{load_config_file, PipConfig};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("pip.yml");
//! fs::write(&path, "executable: pip3").unwrap();
//!
//! let config = load_config_file(&path).unwrap();
//! assert_eq!(config.executable, "pip3");
//! assert_eq!(config.index_url, PipConfig::default().index_url);
//! ```
//!
//! # Environment
//!
//! `PIP_HELPERS_PIP` and `PIP_HELPERS_INDEX_URL` override the executable
//! and index URL when set and non-empty.

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_file, parse_config};
pub use schema::{
    PipConfig, DEFAULT_EXECUTABLE, DEFAULT_INDEX_URL, DEFAULT_TIMEOUT_SECS, ENV_EXECUTABLE,
    ENV_INDEX_URL,
};
