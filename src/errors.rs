//! Error taxonomies for manifest I/O and registry resolution.
//!
//! Manifest failures abort the current operation and surface as a notice;
//! registry failures are caught per package inside the batch resolver and
//! converted to fallback values, so they never abort a batch.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading, writing, or backing up the package manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file does not exist at the given path.
    #[error("manifest not found at {path}")]
    NotFound {
        /// Path that was probed.
        path: PathBuf,
    },

    /// The manifest file exists but is not a valid JSON object.
    #[error("manifest at {path} could not be parsed: {detail}")]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// Parser diagnostic.
        detail: String,
    },

    /// Rewriting the manifest file failed.
    #[error("manifest write to {path} failed: {source}")]
    Write {
        /// Path of the target file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Copying the manifest into the backup directory failed.
    #[error("backup failed: {source}")]
    Backup {
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Failures while resolving a package's latest version against the registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry answered 404 for the package.
    #[error("package not found: {0}")]
    NotFound(String),

    /// The registry answered with a non-success status other than 404.
    #[error("registry returned status {status} for {name}")]
    Http {
        /// Package whose lookup failed.
        name: String,
        /// HTTP status code received.
        status: u16,
    },

    /// The request exceeded the configured timeout.
    #[error("request for {0} timed out")]
    Timeout(String),

    /// The success response body could not be parsed as expected.
    #[error("unexpected response body for {name}: {detail}")]
    Format {
        /// Package whose response was malformed.
        name: String,
        /// Parser diagnostic.
        detail: String,
    },

    /// Transport-level failure (connect refused, TLS, DNS, ...).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}
