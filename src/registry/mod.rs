//! Package index release lookups.
//!
//! Release lookup is separate from the install path: install and uninstall
//! pass specifiers through to the package manager untouched, while this
//! module parses them to filter the versions an index reports.
//!
//! # Example
//!
//! ```no_run
//! use pip_helpers::registry::{ReleaseClient, ReleaseQuery};
//! use pip_helpers::PipConfig;
//!
//! let client = ReleaseClient::new(&PipConfig::default())?;
//! let releases = client.fetch_releases("numpy>=1.11,<1.12", &ReleaseQuery::default())?;
//! for release in releases.iter() {
//!     println!("{} {}", release.version, release.file.filename);
//! }
//! # Ok::<(), pip_helpers::PipError>(())
//! ```

pub mod fetch;
pub mod natural;
pub mod releases;
pub mod specifier;

pub use fetch::IndexFetcher;
pub use natural::{natural_cmp, NaturalKey};
pub use releases::{
    get_releases, is_prerelease, Release, ReleaseClient, ReleaseFile, ReleaseOrder, ReleaseQuery,
    Releases,
};
pub use specifier::{Comparator, PackageSpecifier, VersionConstraint};
