//! Registry client resolving a package name to its latest published version.

use std::time::Duration;

use serde::Deserialize;

use crate::errors::RegistryError;

/// Registry queried when no override is configured.
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// `User-Agent` header sent with every registry request.
pub const USER_AGENT: &str = concat!("depatrol/", env!("CARGO_PKG_VERSION"));

/// Body of a successful `/<name>/latest` response; only `version` matters.
#[derive(Debug, Deserialize)]
struct LatestResponse {
    /// Latest published version of the package.
    version: String,
}

/// HTTP client for the `GET /<name>/latest` registry endpoint.
///
/// Holds no cache and performs exactly one outbound call per invocation;
/// memoization and retries are layered above in [`crate::cache`].
pub struct RegistryClient {
    /// Shared reqwest client carrying the user agent and timeout.
    client: reqwest::Client,
    /// Registry base URL without a trailing slash.
    base_url: String,
}

impl RegistryClient {
    /// What: Build a client for `base_url` with a per-request `timeout`.
    ///
    /// Output:
    /// - The client, or the underlying builder error (TLS backend failure).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Encode a package name for the URL path. Scoped packages keep the `@`
    /// but encode their separator: `@scope/name` becomes `@scope%2Fname`.
    fn encode_package_name(name: &str) -> String {
        if name.starts_with('@') {
            name.replace('/', "%2F")
        } else {
            name.to_string()
        }
    }

    /// What: Resolve `name` to its latest published version.
    ///
    /// Inputs:
    /// - `name`: package name, scoped names allowed
    ///
    /// Output:
    /// - The version string on success. 404 maps to
    ///   [`RegistryError::NotFound`], other non-success statuses to
    ///   [`RegistryError::Http`], an elapsed timeout to
    ///   [`RegistryError::Timeout`], and an unparseable success body to
    ///   [`RegistryError::Format`].
    pub async fn fetch_latest_version(&self, name: &str) -> Result<String, RegistryError> {
        let url = format!("{}/{}/latest", self.base_url, Self::encode_package_name(name));
        tracing::debug!(package = name, url = %url, "[Registry] Fetching latest version");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                RegistryError::Timeout(name.to_string())
            } else {
                RegistryError::Network(e)
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(name.to_string()));
        }
        if !status.is_success() {
            tracing::warn!(
                package = name,
                status = status.as_u16(),
                "[Registry] Non-success status"
            );
            return Err(RegistryError::Http {
                name: name.to_string(),
                status: status.as_u16(),
            });
        }

        let body: LatestResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                RegistryError::Timeout(name.to_string())
            } else {
                RegistryError::Format {
                    name: name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;
        Ok(body.version)
    }
}
