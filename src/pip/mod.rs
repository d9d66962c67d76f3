//! Package-manager invocation: install, uninstall, and list installed.
//!
//! Each call runs the configured executable once, waits for it, and either
//! returns the captured output or fails with [`PipError::CommandFailed`].
//!
//! # Example
//!
//! ```no_run
//! use pip_helpers::pip::{Pip, RunOptions};
//! use pip_helpers::PipConfig;
//!
//! let pip = Pip::new(PipConfig::default().with_executable("pip3"));
//! let output = pip.install(&["numpy>=1.11.1"], &RunOptions::default())?;
//! println!("{}", output.stdout);
//!
//! let installed = pip.freeze(&RunOptions::default())?;
//! assert!(installed.iter().any(|d| d.starts_with("numpy==")));
//! # Ok::<(), pip_helpers::PipError>(())
//! ```

pub mod freeze;

pub use freeze::parse_freeze_output;

use crate::config::PipConfig;
use crate::error::{PipError, Result};
use crate::shell::{display_command, execute, execute_check, CommandOptions, CommandResult};
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

/// First dotted version number in `pip --version` output.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d+(?:\.[0-9A-Za-z]+)+)\b").expect("VERSION_REGEX must compile")
});

/// Per-call options.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Pass-through flags placed after the subcommand and before packages.
    pub flags: Vec<String>,

    /// Capture stdout/stderr (if false, the child inherits the caller's streams).
    pub capture: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            flags: Vec::new(),
            capture: true,
        }
    }
}

impl RunOptions {
    /// Options with the given pass-through flags.
    pub fn with_flags<I, S>(flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            flags: flags.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Let the child write directly to the caller's stdout/stderr.
    pub fn uncaptured(mut self) -> Self {
        self.capture = false;
        self
    }
}

/// Runs package-manager subcommands.
#[derive(Debug, Clone, Default)]
pub struct Pip {
    config: PipConfig,
}

impl Pip {
    /// Create a helper with an explicit configuration.
    pub fn new(config: PipConfig) -> Self {
        Self { config }
    }

    /// Create a helper from the default configuration plus environment overrides.
    pub fn from_env() -> Self {
        Self::new(PipConfig::from_env())
    }

    /// The configuration in use.
    pub fn config(&self) -> &PipConfig {
        &self.config
    }

    /// Install packages.
    ///
    /// Specifiers are passed to the package manager unchanged. An empty list
    /// runs nothing and returns an empty successful result.
    pub fn install<S: AsRef<str>>(
        &self,
        packages: &[S],
        options: &RunOptions,
    ) -> Result<CommandResult> {
        if packages.is_empty() {
            tracing::debug!("install called with no packages; nothing to do");
            return Ok(empty_result());
        }

        let result = self.run(&["install"], packages, options)?;
        tracing::info!("Installed {}", join_packages(packages));
        Ok(result)
    }

    /// Uninstall packages without prompting for confirmation.
    ///
    /// An empty list runs nothing and returns an empty successful result.
    pub fn uninstall<S: AsRef<str>>(
        &self,
        packages: &[S],
        options: &RunOptions,
    ) -> Result<CommandResult> {
        if packages.is_empty() {
            tracing::debug!("uninstall called with no packages; nothing to do");
            return Ok(empty_result());
        }

        let result = self.run(&["uninstall", "-y"], packages, options)?;
        tracing::info!("Uninstalled {}", join_packages(packages));
        Ok(result)
    }

    /// List installed packages as sorted `name==version` descriptors.
    ///
    /// With `capture` disabled the listing goes to the caller's stdout and
    /// the returned list is empty.
    pub fn freeze(&self, options: &RunOptions) -> Result<Vec<String>> {
        let result = self.run(&["list", "--format=freeze"], &[] as &[&str], options)?;
        let descriptors = parse_freeze_output(&result.stdout);
        tracing::debug!("Found {} installed packages", descriptors.len());
        Ok(descriptors)
    }

    /// Version reported by `<executable> --version`.
    pub fn version(&self) -> Result<String> {
        let result = self.run(&["--version"], &[] as &[&str], &RunOptions::default())?;
        VERSION_REGEX
            .captures(&result.stdout)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Could not find a version in output of {} --version: {}",
                    self.config.executable,
                    result.stdout.trim()
                )
                .into()
            })
    }

    /// Whether the package manager can be started and reports a version.
    pub fn is_available(&self) -> bool {
        let args = self.build_args(&["--version"], &[] as &[&str], &RunOptions::default());
        execute_check(&self.config.executable, &args, &self.command_options(true))
    }

    /// Build the argument vector for a subcommand.
    ///
    /// Layout: global args, subcommand, pass-through flags, packages.
    pub fn build_args<S: AsRef<str>>(
        &self,
        subcommand: &[&str],
        packages: &[S],
        options: &RunOptions,
    ) -> Vec<String> {
        let mut args = self.config.global_args.clone();
        args.extend(subcommand.iter().map(|s| s.to_string()));
        args.extend(options.flags.iter().cloned());
        args.extend(packages.iter().map(|p| p.as_ref().to_string()));
        args
    }

    fn command_options(&self, capture: bool) -> CommandOptions {
        CommandOptions {
            cwd: self.config.cwd.clone(),
            env: self.config.env.clone(),
            capture_stdout: capture,
            capture_stderr: capture,
        }
    }

    fn run<S: AsRef<str>>(
        &self,
        subcommand: &[&str],
        packages: &[S],
        options: &RunOptions,
    ) -> Result<CommandResult> {
        let args = self.build_args(subcommand, packages, options);
        let command_line = display_command(&self.config.executable, &args);

        let result = execute(
            &self.config.executable,
            &args,
            &self.command_options(options.capture),
        )?;

        if !result.success {
            tracing::warn!(
                "'{}' exited with code {:?}",
                command_line,
                result.exit_code
            );
            if !options.capture {
                return Err(PipError::CommandFailed {
                    command: command_line.clone(),
                    code: result.exit_code,
                    stdout: String::new(),
                    stderr: format!("Error running command: \"{}\"", command_line),
                });
            }
        }

        result.into_checked(&command_line)
    }
}

/// Install packages with the default configuration.
///
/// Returns the captured standard output followed by standard error.
pub fn install<S: AsRef<str>>(packages: &[S]) -> Result<String> {
    Pip::from_env()
        .install(packages, &RunOptions::default())
        .map(|r| r.combined_output())
}

/// Uninstall packages with the default configuration.
///
/// Returns the captured standard output followed by standard error.
pub fn uninstall<S: AsRef<str>>(packages: &[S]) -> Result<String> {
    Pip::from_env()
        .uninstall(packages, &RunOptions::default())
        .map(|r| r.combined_output())
}

/// List installed packages with the default configuration.
pub fn freeze() -> Result<Vec<String>> {
    Pip::from_env().freeze(&RunOptions::default())
}

fn empty_result() -> CommandResult {
    CommandResult::success(String::new(), String::new(), Duration::ZERO)
}

fn join_packages<S: AsRef<str>>(packages: &[S]) -> String {
    packages
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pip_with(global_args: &[&str]) -> Pip {
        let mut config = PipConfig::default().with_executable("python3");
        config.global_args = global_args.iter().map(|s| s.to_string()).collect();
        Pip::new(config)
    }

    #[test]
    fn build_args_orders_flags_before_packages() {
        let pip = pip_with(&["-m", "pip"]);
        let options = RunOptions::with_flags(["--upgrade", "--no-deps"]);

        let args = pip.build_args(&["install"], &["numpy>=1.11.1", "six"], &options);

        assert_eq!(
            args,
            vec!["-m", "pip", "install", "--upgrade", "--no-deps", "numpy>=1.11.1", "six"]
        );
    }

    #[test]
    fn build_args_for_uninstall_includes_confirmation() {
        let pip = Pip::default();
        let args = pip.build_args(&["uninstall", "-y"], &["six"], &RunOptions::default());
        assert_eq!(args, vec!["uninstall", "-y", "six"]);
    }

    #[test]
    fn run_options_default_captures() {
        let options = RunOptions::default();
        assert!(options.capture);
        assert!(options.flags.is_empty());
        assert!(!options.uncaptured().capture);
    }

    #[test]
    fn empty_install_runs_nothing() {
        let pip = Pip::new(PipConfig::default().with_executable("definitely-not-a-real-pip"));

        let result = pip.install(&[] as &[&str], &RunOptions::default()).unwrap();

        assert!(result.success);
        assert!(result.stdout.is_empty());
        assert!(result.stderr.is_empty());
    }

    #[test]
    fn empty_uninstall_runs_nothing() {
        let pip = Pip::new(PipConfig::default().with_executable("definitely-not-a-real-pip"));
        let result = pip.uninstall(&[] as &[&str], &RunOptions::default()).unwrap();
        assert!(result.success);
    }

    #[test]
    fn missing_executable_surfaces_as_command_failed() {
        let pip = Pip::new(PipConfig::default().with_executable("definitely-not-a-real-pip"));

        let err = pip.install(&["six"], &RunOptions::default()).unwrap_err();

        assert!(matches!(err, PipError::CommandFailed { code: None, .. }));
        assert!(!pip.is_available());
    }

    #[test]
    fn version_regex_extracts_pip_version() {
        let caps = VERSION_REGEX
            .captures("pip 23.2.1 from /usr/lib/python3/dist-packages/pip (python 3.11)")
            .unwrap();
        assert_eq!(&caps[1], "23.2.1");
    }

    #[test]
    fn join_packages_lists_names() {
        assert_eq!(join_packages(&["a", "b==1.0"]), "a, b==1.0");
    }
}
