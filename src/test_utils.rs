//! Test utilities for common test setup.
//!
//! This module provides shared helpers used across multiple test modules.

use crate::manifest::ManifestStore;
use crate::state::AppState;

/// Manifest used by handler and flow tests: two dependency sections plus
/// metadata keys that must survive rewrites untouched.
pub const SAMPLE_MANIFEST: &str = r#"{
  "name": "fixture-app",
  "version": "1.0.0",
  "dependencies": {
    "react": "^18.2.0",
    "left-pad": "1.3.0"
  },
  "devDependencies": {
    "typescript": "~5.4.2"
  }
}
"#;

/// What: Write the sample manifest into a fresh temp dir and load it.
///
/// Inputs: None
///
/// Output: The temp dir guard and the loaded [`ManifestStore`]
pub fn sample_store() -> (tempfile::TempDir, ManifestStore) {
    let dir = tempfile::tempdir().expect("tempdir should be creatable");
    let path = dir.path().join("package.json");
    std::fs::write(&path, SAMPLE_MANIFEST).expect("sample manifest should be writable");
    let store = ManifestStore::load(&path, "pcv_backups").expect("sample manifest should load");
    (dir, store)
}

/// What: Provide a baseline `AppState` over the sample manifest.
///
/// Inputs: None
///
/// Output: The temp dir guard and a fresh `AppState` on the root menu
pub fn sample_state() -> (tempfile::TempDir, AppState) {
    let (dir, store) = sample_store();
    (dir, AppState::new(store))
}
