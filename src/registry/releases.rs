//! Release listing from a JSON package index.
//!
//! The index document is expected in the PyPI JSON API shape: an `info`
//! object and a `releases` object mapping each version string to its list
//! of distribution files.

use crate::config::PipConfig;
use crate::error::{PipError, Result};
use crate::registry::fetch::IndexFetcher;
use crate::registry::natural::natural_cmp;
use crate::registry::specifier::PackageSpecifier;
use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;
use std::time::Duration;

/// Versions treated as pre-releases.
static PRERELEASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.dev|\.pre").expect("PRERELEASE_REGEX must compile"));

const UPLOAD_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"];

/// A distribution file as listed by the index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseFile {
    pub filename: String,
    pub url: String,
    pub packagetype: Option<String>,
    pub python_version: Option<String>,
    pub size: Option<u64>,
    pub upload_time: Option<String>,
    pub digests: HashMap<String, String>,
    pub yanked: bool,
}

impl ReleaseFile {
    /// Parsed upload time, if present and well-formed.
    pub fn uploaded_at(&self) -> Option<NaiveDateTime> {
        let raw = self.upload_time.as_deref()?;
        UPLOAD_TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    }
}

/// One version of a package, described by its first distribution file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub version: String,
    pub file: ReleaseFile,
}

impl Release {
    /// Whether the version looks like a development or pre-release build.
    pub fn is_prerelease(&self) -> bool {
        is_prerelease(&self.version)
    }
}

/// Matching releases for a package, in the requested order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Releases {
    /// Package name as requested.
    pub name: String,
    /// Package name as the index spells it, when the index reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    pub releases: Vec<Release>,
}

impl Releases {
    /// Version strings in order.
    pub fn versions(&self) -> Vec<&str> {
        self.releases.iter().map(|r| r.version.as_str()).collect()
    }

    /// The last release in order (most recent upload by default).
    pub fn latest(&self) -> Option<&Release> {
        self.releases.last()
    }

    /// Look up a release by exact version string.
    pub fn get(&self, version: &str) -> Option<&Release> {
        self.releases.iter().find(|r| r.version == version)
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Release> {
        self.releases.iter()
    }
}

/// How to order releases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReleaseOrder {
    /// Oldest upload first.
    #[default]
    UploadTime,
    /// Natural version order, lowest first.
    Version,
}

/// Options for a release lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReleaseQuery {
    /// Include `.dev` and `.pre` versions.
    pub pre: bool,
    pub order: ReleaseOrder,
}

#[derive(Debug, Deserialize)]
struct PackageIndex {
    #[serde(default)]
    info: Option<PackageInfo>,
    #[serde(default)]
    releases: HashMap<String, Vec<ReleaseFile>>,
}

#[derive(Debug, Deserialize)]
struct PackageInfo {
    name: Option<String>,
}

/// Looks up package releases in a JSON index.
pub struct ReleaseClient {
    fetcher: IndexFetcher,
    index_url: String,
}

impl ReleaseClient {
    /// Create a client using the configured index URL and timeout.
    pub fn new(config: &PipConfig) -> Result<Self> {
        let fetcher = IndexFetcher::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Self {
            fetcher,
            index_url: config.index_url.clone(),
        })
    }

    /// Index URL for `package` (`{}` in the template is replaced by the name).
    pub fn package_url(&self, package: &str) -> String {
        self.index_url.replace("{}", package)
    }

    /// List the releases of the package named in `specifier` that satisfy
    /// its version constraints.
    ///
    /// # Errors
    ///
    /// - `InvalidSpecifier` before any request if `specifier` does not parse
    /// - `Other` if the index can't be fetched or decoded
    /// - `NoReleases` if the index lists no usable releases
    /// - `NoMatchingReleases` if none satisfy the constraints
    pub fn fetch_releases(&self, specifier: &str, query: &ReleaseQuery) -> Result<Releases> {
        let spec = PackageSpecifier::parse(specifier)?;
        let url = self.package_url(&spec.name);
        let index: PackageIndex = self.fetcher.fetch_json(&url)?;
        select_releases(&spec, index, query)
    }
}

/// List releases using the default configuration plus environment overrides.
pub fn get_releases(specifier: &str, pre: bool) -> Result<Releases> {
    let client = ReleaseClient::new(&PipConfig::from_env())?;
    client.fetch_releases(
        specifier,
        &ReleaseQuery {
            pre,
            ..Default::default()
        },
    )
}

/// Whether `version` looks like a development or pre-release build.
pub fn is_prerelease(version: &str) -> bool {
    PRERELEASE_REGEX.is_match(version)
}

fn select_releases(
    spec: &PackageSpecifier,
    index: PackageIndex,
    query: &ReleaseQuery,
) -> Result<Releases> {
    let name = spec.name.clone();
    let index_name = index.info.and_then(|info| info.name);

    let mut all: Vec<Release> = index
        .releases
        .into_iter()
        .filter_map(|(version, files)| {
            files
                .into_iter()
                .next()
                .map(|file| Release { version, file })
        })
        .collect();

    if all.is_empty() {
        return Err(PipError::NoReleases { package: name });
    }

    match query.order {
        ReleaseOrder::UploadTime => all.sort_by(|a, b| {
            a.file
                .uploaded_at()
                .cmp(&b.file.uploaded_at())
                .then_with(|| natural_cmp(&a.version, &b.version))
        }),
        ReleaseOrder::Version => all.sort_by(|a, b| natural_cmp(&a.version, &b.version)),
    }

    let available: Vec<String> = all.iter().map(|r| r.version.clone()).collect();

    let releases: Vec<Release> = all
        .into_iter()
        .filter(|r| spec.matches(&r.version) && (query.pre || !r.is_prerelease()))
        .collect();

    if releases.is_empty() {
        return Err(PipError::NoMatchingReleases {
            specifiers: spec.constraints_string(),
            available,
        });
    }

    tracing::debug!(
        "{} release(s) of {} match '{}'",
        releases.len(),
        name,
        spec
    );

    Ok(Releases {
        name,
        index_name,
        releases,
    })
}
