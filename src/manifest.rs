//! Package manifest store: load, section access, updates, timestamped backups.
//!
//! The manifest is held as the full JSON document, not just the three
//! dependency sections, so unknown top-level keys and the author's key order
//! survive every rewrite (`serde_json` runs with `preserve_order`).

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::errors::ManifestError;

/// One of the three known dependency groups of a manifest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// Direct runtime dependencies.
    Dependencies,
    /// Development-only dependencies.
    DevDependencies,
    /// Version overrides.
    Overrides,
}

impl Section {
    /// All sections in merge-precedence order; later entries win in the
    /// merged view.
    pub const ALL: [Self; 3] = [Self::Dependencies, Self::DevDependencies, Self::Overrides];

    /// Top-level JSON key of the section.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Dependencies => "dependencies",
            Self::DevDependencies => "devDependencies",
            Self::Overrides => "overrides",
        }
    }

    /// Human-readable heading used by tables and notices.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dependencies => "Dependencies",
            Self::DevDependencies => "Dev Dependencies",
            Self::Overrides => "Overrides",
        }
    }
}

/// Open manifest session: the parsed document plus the paths it writes to.
///
/// All mutations funnel through [`ManifestStore::update_section`] and
/// [`ManifestStore::backup`]; menus never poke at the JSON directly.
#[derive(Debug)]
pub struct ManifestStore {
    /// Path of the manifest file.
    path: PathBuf,
    /// Directory receiving timestamped copies, sited next to the manifest.
    backup_dir: PathBuf,
    /// The whole parsed document (always a JSON object).
    data: Value,
}

impl ManifestStore {
    /// What: Read and parse the manifest at `path`.
    ///
    /// Inputs:
    /// - `path`: manifest file location
    /// - `backup_dir_name`: directory name for backups, created next to the
    ///   manifest on first use
    ///
    /// Output:
    /// - An open store, or [`ManifestError::NotFound`] /
    ///   [`ManifestError::Parse`].
    pub fn load(path: &Path, backup_dir_name: &str) -> Result<Self, ManifestError> {
        if !path.is_file() {
            return Err(ManifestError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path).map_err(|e| ManifestError::Parse {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
        let data: Value = serde_json::from_str(&content).map_err(|e| ManifestError::Parse {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
        if !data.is_object() {
            return Err(ManifestError::Parse {
                path: path.to_path_buf(),
                detail: "root is not a JSON object".to_string(),
            });
        }
        let backup_dir = path
            .parent()
            .map_or_else(|| PathBuf::from(backup_dir_name), |d| d.join(backup_dir_name));
        tracing::info!(path = %path.display(), "[Manifest] Loaded");
        Ok(Self {
            path: path.to_path_buf(),
            backup_dir,
            data,
        })
    }

    /// Path of the underlying manifest file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the document currently carries the section's top-level key.
    pub fn has_section(&self, section: Section) -> bool {
        self.data.get(section.key()).is_some()
    }

    /// What: Name/version pairs of one section, in document order.
    ///
    /// Inputs:
    /// - `section`: which dependency group to read
    ///
    /// Output:
    /// - Owned pairs; empty when the section is absent or not an object.
    ///   Non-string version values are skipped. Never fails.
    pub fn section(&self, section: Section) -> Vec<(String, String)> {
        let Some(map) = self.data.get(section.key()).and_then(Value::as_object) else {
            return Vec::new();
        };
        map.iter()
            .filter_map(|(name, v)| v.as_str().map(|ver| (name.clone(), ver.to_string())))
            .collect()
    }

    /// What: Union of all three sections as one ordered mapping.
    ///
    /// Output:
    /// - Pairs keyed by package name. On duplicate names the later section in
    ///   [`Section::ALL`] order silently overwrites the value while the name
    ///   keeps its first position. The underlying sections are untouched.
    pub fn all_packages(&self) -> Vec<(String, String)> {
        let mut merged: serde_json::Map<String, Value> = serde_json::Map::new();
        for section in Section::ALL {
            for (name, version) in self.section(section) {
                merged.insert(name, Value::String(version));
            }
        }
        merged
            .into_iter()
            .filter_map(|(name, v)| match v {
                Value::String(ver) => Some((name, ver)),
                _ => None,
            })
            .collect()
    }

    /// What: Merge `updates` into a section and rewrite the manifest file.
    ///
    /// Inputs:
    /// - `section`: target group, created as an empty object when absent
    /// - `updates`: name → new version pairs to merge in
    ///
    /// Output:
    /// - `Ok` after the full file rewrite; [`ManifestError::Write`] on I/O
    ///   failure. Existing entries keep their position, new names append.
    pub fn update_section(
        &mut self,
        section: Section,
        updates: &[(String, String)],
    ) -> Result<(), ManifestError> {
        let root = self
            .data
            .as_object_mut()
            .ok_or_else(|| ManifestError::Parse {
                path: self.path.clone(),
                detail: "root is not a JSON object".to_string(),
            })?;
        let entry = root
            .entry(section.key().to_string())
            .or_insert_with(|| Value::Object(serde_json::Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(serde_json::Map::new());
        }
        if let Some(map) = entry.as_object_mut() {
            for (name, version) in updates {
                map.insert(name.clone(), Value::String(version.clone()));
            }
        }
        tracing::info!(
            section = section.key(),
            count = updates.len(),
            "[Manifest] Section updated"
        );
        self.save()
    }

    /// Rewrite the whole file, pretty-printed with two-space indent.
    ///
    /// The write is whole-file but not atomic-rename; process death mid-write
    /// can leave a torn file. Accepted for an interactive local tool.
    fn save(&self) -> Result<(), ManifestError> {
        let content = serde_json::to_string_pretty(&self.data).map_err(|e| ManifestError::Write {
            path: self.path.clone(),
            source: std::io::Error::other(e),
        })?;
        fs::write(&self.path, content).map_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "[Manifest] Write failed");
            ManifestError::Write {
                path: self.path.clone(),
                source: e,
            }
        })?;
        tracing::debug!(path = %self.path.display(), "[Manifest] Persisted");
        Ok(())
    }

    /// What: Copy the manifest into the backup directory.
    ///
    /// Output:
    /// - Path of the new copy, named
    ///   `package_<ISO8601 with ':' and '.' replaced by '-'>.json`.
    ///   [`ManifestError::Backup`] when the directory or copy fails. Backups
    ///   accumulate; nothing prunes them.
    pub fn backup(&self) -> Result<PathBuf, ManifestError> {
        fs::create_dir_all(&self.backup_dir).map_err(|e| ManifestError::Backup { source: e })?;
        let timestamp = chrono::Utc::now()
            .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
            .replace([':', '.'], "-");
        let target = self.backup_dir.join(format!("package_{timestamp}.json"));
        fs::copy(&self.path, &target).map_err(|e| {
            tracing::warn!(path = %target.display(), error = %e, "[Manifest] Backup failed");
            ManifestError::Backup { source: e }
        })?;
        tracing::info!(path = %target.display(), "[Manifest] Backup created");
        Ok(target)
    }

    /// The parsed document, exposed for round-trip assertions in tests.
    pub fn json(&self) -> &Value {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
  "name": "fixture",
  "dependencies": {
    "left-pad": "^1.0.0",
    "lodash": "~4.17.21"
  },
  "devDependencies": {
    "lodash": "4.17.0",
    "vitest": "1.2.0"
  },
  "scripts": {
    "build": "tsc"
  }
}"#;

    fn store_with(content: &str) -> (tempfile::TempDir, ManifestStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, content).unwrap();
        let store = ManifestStore::load(&path, "pcv_backups").unwrap();
        (dir, store)
    }

    /// Missing files map to the dedicated not-found error.
    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = ManifestStore::load(&dir.path().join("package.json"), "pcv_backups");
        assert!(matches!(err, Err(ManifestError::NotFound { .. })));
    }

    /// Invalid JSON and non-object roots both map to parse errors.
    #[test]
    fn load_rejects_invalid_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, "{ nope").unwrap();
        assert!(matches!(
            ManifestStore::load(&path, "pcv_backups"),
            Err(ManifestError::Parse { .. })
        ));
        fs::write(&path, "[1, 2]").unwrap();
        assert!(matches!(
            ManifestStore::load(&path, "pcv_backups"),
            Err(ManifestError::Parse { .. })
        ));
    }

    /// Absent sections read as empty, present ones keep document order.
    #[test]
    fn section_access_never_fails() {
        let (_dir, store) = store_with(SAMPLE);
        assert_eq!(
            store.section(Section::Dependencies),
            vec![
                ("left-pad".to_string(), "^1.0.0".to_string()),
                ("lodash".to_string(), "~4.17.21".to_string()),
            ]
        );
        assert!(store.section(Section::Overrides).is_empty());
        assert!(!store.has_section(Section::Overrides));
    }

    /// The merged view lets later sections overwrite values while keeping the
    /// first occurrence's position; sections themselves stay untouched.
    #[test]
    fn merged_view_applies_precedence() {
        let (_dir, store) = store_with(SAMPLE);
        let merged = store.all_packages();
        assert_eq!(
            merged,
            vec![
                ("left-pad".to_string(), "^1.0.0".to_string()),
                ("lodash".to_string(), "4.17.0".to_string()),
                ("vitest".to_string(), "1.2.0".to_string()),
            ]
        );
        assert_eq!(store.section(Section::Dependencies)[1].1, "~4.17.21");
    }

    /// An empty update still rewrites the file to identical content.
    #[test]
    fn round_trip_with_empty_update_is_deep_equal() {
        let (_dir, mut store) = store_with(SAMPLE);
        let before = store.json().clone();
        store.update_section(Section::Dependencies, &[]).unwrap();
        let reloaded = ManifestStore::load(store.path(), "pcv_backups").unwrap();
        assert_eq!(reloaded.json(), &before);
    }

    /// Updates merge into the section, keep key order, and persist.
    #[test]
    fn update_section_merges_and_persists() {
        let (_dir, mut store) = store_with(SAMPLE);
        store
            .update_section(
                Section::Dependencies,
                &[("left-pad".to_string(), "1.3.0".to_string())],
            )
            .unwrap();
        let reloaded = ManifestStore::load(store.path(), "pcv_backups").unwrap();
        assert_eq!(
            reloaded.section(Section::Dependencies),
            vec![
                ("left-pad".to_string(), "1.3.0".to_string()),
                ("lodash".to_string(), "~4.17.21".to_string()),
            ]
        );
        // Unrelated top-level keys are untouched by the rewrite.
        assert_eq!(reloaded.json()["scripts"]["build"], "tsc");
    }

    /// Updating a section the document lacks creates it.
    #[test]
    fn update_section_creates_missing_section() {
        let (_dir, mut store) = store_with(r#"{"name": "bare"}"#);
        store
            .update_section(Section::Overrides, &[("a".to_string(), "1.0.0".to_string())])
            .unwrap();
        let reloaded = ManifestStore::load(store.path(), "pcv_backups").unwrap();
        assert_eq!(
            reloaded.section(Section::Overrides),
            vec![("a".to_string(), "1.0.0".to_string())]
        );
    }

    /// Backups land in the sibling directory with the timestamped name.
    #[test]
    fn backup_copies_with_timestamped_name() {
        let (dir, store) = store_with(SAMPLE);
        let first = store.backup().unwrap();
        assert!(first.is_file());
        assert!(first.starts_with(dir.path().join("pcv_backups")));
        let file_name = first.file_name().unwrap().to_string_lossy().into_owned();
        assert!(file_name.starts_with("package_"));
        assert!(file_name.ends_with(".json"));
        assert!(!file_name.contains(':'));
        // Backups accumulate rather than replacing each other.
        let second = store.backup();
        assert!(second.is_ok());
        assert_eq!(
            fs::read_to_string(&first).unwrap(),
            fs::read_to_string(store.path()).unwrap()
        );
    }
}
