//! Configuration types for the BookSearchClient.

use std::time::Duration;

/// Default engine address.
pub const DEFAULT_HOST: &str = "http://localhost:9200/";

/// Default collection (engine index) holding book records.
pub const DEFAULT_COLLECTION: &str = "docBook";

/// Default document kind (engine type) within the collection.
pub const DEFAULT_KIND: &str = "Book";

/// Default bound on every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Connection settings for a BookSearchClient.
///
/// The host always ends in exactly one `/`, so endpoint paths can be appended
/// without producing doubled or missing separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    host: String,
    collection: String,
    kind: String,
    timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_COLLECTION, DEFAULT_KIND, DEFAULT_TIMEOUT)
    }
}

impl ClientConfig {
    /// Create a config, normalizing the host's trailing slash.
    pub fn new(
        host: impl AsRef<str>,
        collection: impl Into<String>,
        kind: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            host: normalize_host(host.as_ref()),
            collection: collection.into(),
            kind: kind.into(),
            timeout,
        }
    }

    /// Return a copy pointing at a different host.
    pub fn with_host(self, host: impl AsRef<str>) -> Self {
        Self {
            host: normalize_host(host.as_ref()),
            ..self
        }
    }

    /// Return a copy using a different collection.
    pub fn with_collection(self, collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            ..self
        }
    }

    /// Return a copy using a different document kind.
    pub fn with_kind(self, kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..self
        }
    }

    /// Return a copy with a different request timeout.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn normalize_host(host: &str) -> String {
    format!("{}/", host.trim_end_matches('/'))
}
