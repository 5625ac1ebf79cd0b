//! User settings: compiled defaults, optional `depatrol.conf`, CLI overrides.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::args::Cli;
use crate::net::DEFAULT_REGISTRY_URL;

/// Runtime configuration assembled from defaults, the conf file, and flags.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Path of the package manifest to patrol.
    pub manifest_path: PathBuf,
    /// Registry base URL.
    pub registry_url: String,
    /// Per-request timeout for registry lookups.
    pub request_timeout: Duration,
    /// Maximum age at which a cached version is still served.
    pub cache_ttl: Duration,
    /// Total lookup attempts per package (first try included).
    pub retry_attempts: u32,
    /// Backoff unit; the sleep after failed attempt `i` is `base * i`.
    pub retry_base_delay: Duration,
    /// Name of the backup directory created next to the manifest.
    pub backup_dir_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from("./package.json"),
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            request_timeout: Duration::from_millis(5000),
            cache_ttl: Duration::from_millis(3_600_000),
            retry_attempts: 3,
            retry_base_delay: Duration::from_millis(1000),
            backup_dir_name: "pcv_backups".to_string(),
        }
    }
}

impl Settings {
    /// What: Apply one parsed `key = value` line from the conf file.
    ///
    /// Details:
    /// - Unknown keys are ignored, malformed values keep the previous value.
    fn apply_key(&mut self, key: &str, val: &str) {
        match key {
            "manifest_path" => {
                if !val.is_empty() {
                    self.manifest_path = PathBuf::from(val);
                }
            }
            "registry_url" => {
                if !val.is_empty() {
                    self.registry_url = val.to_string();
                }
            }
            "request_timeout_ms" => {
                if let Ok(v) = val.parse::<u64>() {
                    self.request_timeout = Duration::from_millis(v);
                }
            }
            "cache_ttl_ms" => {
                if let Ok(v) = val.parse::<u64>() {
                    self.cache_ttl = Duration::from_millis(v);
                }
            }
            "retry_attempts" => {
                if let Ok(v) = val.parse::<u32>() {
                    self.retry_attempts = v.max(1);
                }
            }
            "retry_base_delay_ms" => {
                if let Ok(v) = val.parse::<u64>() {
                    self.retry_base_delay = Duration::from_millis(v);
                }
            }
            "backup_dir_name" => {
                if !val.is_empty() {
                    self.backup_dir_name = val.to_string();
                }
            }
            _ => {}
        }
    }

    /// What: Merge every recognized line of a conf file body into `self`.
    ///
    /// Details:
    /// - Lines are `key = value`; `#` and `//` start comments, inline
    ///   comments are stripped, keys are case-insensitive with `.`/`-`/space
    ///   folded to `_`.
    fn apply_conf(&mut self, content: &str) {
        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
                continue;
            }
            let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
                continue;
            };
            let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
            let val = strip_inline_comment(raw_val.trim());
            self.apply_key(&key, val);
        }
    }

    /// Apply CLI flags on top; flags win over the conf file.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(path) = &cli.manifest {
            self.manifest_path.clone_from(path);
        }
        if let Some(url) = &cli.registry {
            self.registry_url.clone_from(url);
        }
    }
}

/// What: Load settings from `depatrol.conf` under the config dir.
///
/// Output:
/// - Defaults when the file is missing or unreadable; otherwise defaults
///   overlaid with every recognized line.
pub fn settings() -> Settings {
    let mut out = Settings::default();
    let path = crate::paths::settings_file();
    let Ok(content) = fs::read_to_string(&path) else {
        tracing::debug!(path = %path.display(), "[Settings] No conf file, using defaults");
        return out;
    };
    out.apply_conf(&content);
    tracing::info!(path = %path.display(), "[Settings] Loaded");
    out
}

/// Drop an unquoted trailing `#` or `//` comment from a value.
fn strip_inline_comment(val: &str) -> &str {
    let cut = val
        .find(" #")
        .into_iter()
        .chain(val.find(" //"))
        .min()
        .unwrap_or(val.len());
    val[..cut].trim_end()
}
