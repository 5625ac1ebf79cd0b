//! Version string normalization and freshness classification.

use std::cmp::Ordering;

/// Sentinel substituted for a version that could not be resolved.
///
/// Batch resolution never fails outright; a package whose lookup failed is
/// reported with this value and classified [`VersionStatus::Unavailable`].
pub const UNAVAILABLE: &str = "unavailable";

/// Outcome of comparing a pinned version against the registry's latest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VersionStatus {
    /// Normalized versions are equal.
    UpToDate,
    /// The registry reports a newer version than the pinned one.
    UpdateAvailable,
    /// The latest version equals the fallback sentinel.
    Unavailable,
    /// The registry reports an older version than the pinned one. A tooling
    /// anomaly rather than a real downgrade.
    Error,
}

/// What: Reduce a version specifier to its comparable core.
///
/// Inputs:
/// - `version`: raw specifier, possibly carrying a range prefix
///
/// Output:
/// - The specifier with one leading `^` or `~` stripped and everything from
///   the first `-` on removed; `"0.0.0"` when nothing remains.
pub fn normalize(version: &str) -> String {
    let stripped = version.strip_prefix(['^', '~']).unwrap_or(version);
    let core = match stripped.split_once('-') {
        Some((head, _)) => head,
        None => stripped,
    };
    if core.is_empty() {
        "0.0.0".to_string()
    } else {
        core.to_string()
    }
}

/// What: Classify a (current, latest) pair into one of four outcomes.
///
/// Inputs:
/// - `current`: version pinned in the manifest
/// - `latest`: version reported by the registry, or [`UNAVAILABLE`]
///
/// Output:
/// - A [`VersionStatus`] derived from lexicographic comparison of the
///   normalized strings.
///
///// Details:
/// - Comparison is plain string ordering, not semver precedence, so a
///   two-digit major like `10.0.0` sorts below `9.0.0`. Preserved on
///   purpose; see the pinned test below.
pub fn classify(current: &str, latest: &str) -> VersionStatus {
    if latest == UNAVAILABLE {
        return VersionStatus::Unavailable;
    }
    let current = normalize(current);
    let latest = normalize(latest);
    match latest.cmp(&current) {
        Ordering::Less => VersionStatus::Error,
        Ordering::Equal => VersionStatus::UpToDate,
        Ordering::Greater => VersionStatus::UpdateAvailable,
    }
}
