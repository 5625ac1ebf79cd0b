//! Filesystem locations for configuration and logs.

use std::env;
use std::fs;
use std::path::PathBuf;

/// What: The depatrol configuration directory, created if missing.
///
/// Output:
/// - `$DEPATROL_CONFIG_DIR` when set and non-empty (tests point this at a
///   temp dir), else `$XDG_CONFIG_HOME/depatrol`, else
///   `$HOME/.config/depatrol`.
pub fn config_dir() -> PathBuf {
    if let Ok(p) = env::var("DEPATROL_CONFIG_DIR")
        && !p.trim().is_empty()
    {
        let dir = PathBuf::from(p);
        let _ = fs::create_dir_all(&dir);
        return dir;
    }
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join("depatrol");
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Log directory under the config dir, created if missing.
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Location of the optional `depatrol.conf` settings file.
pub fn settings_file() -> PathBuf {
    config_dir().join("depatrol.conf")
}

/// Resolve an XDG base directory from environment or default to `$HOME`
/// plus the given segments.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}
