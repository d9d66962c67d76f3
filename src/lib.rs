//! pip-helpers - install, uninstall, and list Python packages from Rust.
//!
//! A thin layer over the `pip` command line. Each operation runs the
//! package manager once as a subprocess, captures its output, and returns
//! it, or fails with [`PipError::CommandFailed`] when it exits non-zero.
//!
//! # Modules
//!
//! - [`config`] - Executable, environment, and index settings
//! - [`error`] - Error types and result aliases
//! - [`logging`] - Optional tracing subscriber setup
//! - [`pip`] - Install, uninstall, and freeze
//! - [`registry`] - Release lookups against a JSON package index
//! - [`shell`] - Subprocess execution with output capture
//!
//! # Example
//!
//! ```no_run
//! // Uses `pip` from PATH, or `PIP_HELPERS_PIP` when set.
//! let output = pip_helpers::install(&["numpy>=1.11.1"])?;
//! println!("{output}");
//!
//! let installed = pip_helpers::freeze()?;
//! assert!(installed.iter().any(|d| d.starts_with("numpy==")));
//!
//! pip_helpers::uninstall(&["numpy"])?;
//! # Ok::<(), pip_helpers::PipError>(())
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod pip;
pub mod registry;
pub mod shell;

pub use config::PipConfig;
pub use error::{PipError, Result};
pub use pip::{freeze, install, uninstall, Pip, RunOptions};
pub use registry::{get_releases, Releases};
