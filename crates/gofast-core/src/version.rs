//! Version reporting for the `version` command
//!
//! A build can carry version information in three places. In priority
//! order: a release version embedded at build time, the package version
//! (unless it is the `0.0.0` development placeholder), and the VCS
//! revision the binary was built from.

use semver::Version;

pub const NO_VERSION_AVAILABLE: &str =
    "No version info available for this build, run 'gofast version' for additional info";

/// Version sources known for this build
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildInfo<'a> {
    /// Release version embedded at build time
    pub embedded: Option<&'a str>,
    /// Version from the package manifest
    pub package: Option<&'a str>,
    /// Commit hash of the source tree
    pub revision: Option<&'a str>,
    /// Commit date of `revision`
    pub revision_date: Option<&'a str>,
}

impl BuildInfo<'_> {
    /// Best available description, or [`NO_VERSION_AVAILABLE`]
    pub fn describe(&self) -> String {
        if let Some(embedded) = non_empty(self.embedded) {
            return match parse_version(embedded) {
                Some(version) => format!("v{version}"),
                None => embedded.to_string(),
            };
        }

        if let Some(version) = non_empty(self.package).and_then(parse_version) {
            if version != Version::new(0, 0, 0) {
                return format!("v{version}");
            }
        }

        match (non_empty(self.revision), non_empty(self.revision_date)) {
            (Some(revision), Some(date)) => format!("{revision}, ({date})"),
            (Some(revision), None) => revision.to_string(),
            _ => NO_VERSION_AVAILABLE.to_string(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parse a version string, with or without a leading `v`
pub fn parse_version(version: &str) -> Option<Version> {
    let cleaned = version.strip_prefix('v').unwrap_or(version);
    Version::parse(cleaned).ok()
}
