//! Concurrent batch resolution with per-package failure isolation.

use std::collections::HashMap;

use crate::cache::VersionCache;
use crate::manifest::Section;
use crate::net::RegistryClient;

/// One package to resolve plus the value substituted when resolution fails.
#[derive(Clone, Debug)]
pub struct ResolveRequest {
    /// Package name to look up.
    pub name: String,
    /// Substitute reported when the lookup fails after all retries; typically
    /// the current pinned version, or [`crate::compare::UNAVAILABLE`].
    pub fallback: String,
}

/// Why a batch was requested; tells the runtime how to apply the outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolvePurpose {
    /// Read-only check across the merged view; renders tables.
    Check,
    /// Update every package of one section.
    WholeSection(Section),
    /// Update every existing section from the merged view.
    All,
    /// Update only the user-selected packages of one section.
    Selected(Section),
}

/// A batch handed to the resolver worker.
#[derive(Clone, Debug)]
pub struct ResolveJob {
    /// How the completed batch will be applied.
    pub purpose: ResolvePurpose,
    /// Packages to resolve, with their fallbacks.
    pub requests: Vec<ResolveRequest>,
}

/// A completed batch reported back to the runtime.
#[derive(Debug)]
pub struct ResolveDone {
    /// Purpose carried over from the originating job.
    pub purpose: ResolvePurpose,
    /// Name → resolved-or-fallback version, one entry per requested name.
    pub resolved: HashMap<String, String>,
}

/// What: Resolve every request concurrently, never failing the batch.
///
/// Inputs:
/// - `cache`: memoization and retry layer
/// - `registry`: client used on cache misses
/// - `requests`: distinct package names with their fallbacks
///
/// Output:
/// - Exactly one entry per input name: the resolved version, or the
///   request's fallback when resolution failed after all retries. No error
///   escapes; an unreachable package never blocks reporting on the others.
///
/// Details:
/// - Lookups run as a structured gather over independent futures; a failure
///   in one never cancels its siblings. The map is keyed by name, so
///   completion order is irrelevant.
pub async fn resolve_many(
    cache: &VersionCache,
    registry: &RegistryClient,
    requests: &[ResolveRequest],
) -> HashMap<String, String> {
    let lookups = requests.iter().map(|req| async move {
        match cache.latest(registry, &req.name).await {
            Ok(version) => (req.name.clone(), version),
            Err(e) => {
                tracing::warn!(package = %req.name, error = %e, "[Resolve] Using fallback");
                (req.name.clone(), req.fallback.clone())
            }
        }
    });
    futures::future::join_all(lookups).await.into_iter().collect()
}
