//! Resource addressing for engine requests.

use std::fmt;

use crate::config::ClientConfig;

/// Operation suffix appended after the kind segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Count,
    Search,
}

impl Operation {
    fn as_str(self) -> &'static str {
        match self {
            Self::Count => "_count",
            Self::Search => "_search",
        }
    }
}

/// A fully-qualified engine resource.
///
/// Kept as host plus relative path so transports that own their own base URL
/// can use the path alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    path: String,
}

impl Endpoint {
    /// The engine root, used for reachability checks.
    pub fn root(config: &ClientConfig) -> Self {
        Self {
            host: config.host().to_string(),
            path: String::new(),
        }
    }

    /// `{host}{collection}`
    pub fn collection(config: &ClientConfig) -> Self {
        Self {
            host: config.host().to_string(),
            path: config.collection().to_string(),
        }
    }

    /// `{host}{collection}/{kind}/{id}`
    pub fn document(config: &ClientConfig, id: impl fmt::Display) -> Self {
        Self {
            host: config.host().to_string(),
            path: format!("{}/{}/{}", config.collection(), config.kind(), id),
        }
    }

    /// `{host}{collection}/{kind}/{_count|_search}`
    pub fn operation(config: &ClientConfig, operation: Operation) -> Self {
        Self {
            host: config.host().to_string(),
            path: format!(
                "{}/{}/{}",
                config.collection(),
                config.kind(),
                operation.as_str()
            ),
        }
    }

    /// The path relative to the host, without a leading slash.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The full URL.
    pub fn url(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.host, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig::default().with_host("http://es.local:9200")
    }

    #[test]
    fn test_root_is_bare_host() {
        assert_eq!(Endpoint::root(&config()).url(), "http://es.local:9200/");
        assert_eq!(Endpoint::root(&config()).path(), "");
    }

    #[test]
    fn test_collection() {
        assert_eq!(
            Endpoint::collection(&config()).url(),
            "http://es.local:9200/docBook"
        );
    }

    #[test]
    fn test_document() {
        let endpoint = Endpoint::document(&config(), 42);

        assert_eq!(endpoint.url(), "http://es.local:9200/docBook/Book/42");
        assert_eq!(endpoint.path(), "docBook/Book/42");
        assert_eq!(endpoint.to_string(), endpoint.url());
    }

    #[test]
    fn test_operations() {
        assert_eq!(
            Endpoint::operation(&config(), Operation::Count).url(),
            "http://es.local:9200/docBook/Book/_count"
        );
        assert_eq!(
            Endpoint::operation(&config(), Operation::Search).url(),
            "http://es.local:9200/docBook/Book/_search"
        );
    }

    #[test]
    fn test_host_with_path_prefix() {
        let config = ClientConfig::default().with_host("https://proxy.local/es/");

        assert_eq!(
            Endpoint::document(&config, 1).url(),
            "https://proxy.local/es/docBook/Book/1"
        );
    }
}
