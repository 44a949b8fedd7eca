//! OpenSearch transport implementation.
//!
//! This module provides the concrete `EngineTransport` using the OpenSearch
//! Rust client's single-node transport and its raw `send` API, so requests
//! keep the exact `{collection}/{kind}/...` paths the engine expects.

use std::time::Duration;

use async_trait::async_trait;
use opensearch::{
    http::{
        headers::{HeaderMap, HeaderValue, CONTENT_TYPE},
        request::JsonBody,
        transport::{SingleNodeConnectionPool, TransportBuilder},
        Method,
    },
    OpenSearch,
};
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use crate::config::ClientConfig;
use crate::errors::{SearchError, TransportError};
use crate::interfaces::{EngineReply, EngineRequest, EngineTransport, HttpMethod};
use crate::outcome::is_success;

/// Transport backed by the OpenSearch client.
///
/// # Example
///
/// ```ignore
/// let config = ClientConfig::default().with_host("http://localhost:9200");
/// let transport = OpenSearchTransport::new(&config)?;
/// let reply = transport.send(EngineRequest::get(Endpoint::root(&config))).await?;
/// ```
pub struct OpenSearchTransport {
    client: OpenSearch,
    timeout: Duration,
}

impl OpenSearchTransport {
    /// Create a transport for the configured host.
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchTransport)` - A new transport
    /// * `Err(SearchError::InvalidConfig)` - If the host is not a valid URL or
    ///   the HTTP client cannot be built
    pub fn new(config: &ClientConfig) -> Result<Self, SearchError> {
        let url = Url::parse(config.host())
            .map_err(|e| SearchError::invalid_config(format!("Invalid host: {}", e)))?;

        let conn_pool = SingleNodeConnectionPool::new(url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .timeout(config.timeout())
            .build()
            .map_err(|e| SearchError::invalid_config(e.to_string()))?;

        info!(
            host = %config.host(),
            timeout_ms = config.timeout().as_millis() as u64,
            "Created OpenSearch transport"
        );

        Ok(Self {
            client: OpenSearch::new(transport),
            timeout: config.timeout(),
        })
    }

    fn method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::Get,
            HttpMethod::Put => Method::Put,
            HttpMethod::Post => Method::Post,
            HttpMethod::Delete => Method::Delete,
        }
    }

    fn map_error(err: opensearch::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::timeout(err.to_string())
        } else {
            TransportError::request(err.to_string())
        }
    }
}

#[async_trait]
impl EngineTransport for OpenSearchTransport {
    async fn send(&self, request: EngineRequest) -> Result<EngineReply, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let body: Option<JsonBody<Value>> = request.body.map(JsonBody::new);

        debug!(
            method = ?request.method,
            url = %request.endpoint,
            "Sending engine request"
        );

        let response = self
            .client
            .send(
                Self::method(request.method),
                request.endpoint.path(),
                headers,
                Option::<&Value>::None,
                body,
                Some(self.timeout),
            )
            .await
            .map_err(Self::map_error)?;

        let status = response.status_code();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();

        // An unreadable error body is reported as empty; an unreadable success
        // body means the call did not complete.
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if is_success(status.as_u16()) => return Err(Self::map_error(e)),
            Err(_) => String::new(),
        };

        Ok(EngineReply {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::Endpoint;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[test]
    fn test_method_mapping() {
        assert!(matches!(
            OpenSearchTransport::method(HttpMethod::Get),
            Method::Get
        ));
        assert!(matches!(
            OpenSearchTransport::method(HttpMethod::Put),
            Method::Put
        ));
        assert!(matches!(
            OpenSearchTransport::method(HttpMethod::Post),
            Method::Post
        ));
        assert!(matches!(
            OpenSearchTransport::method(HttpMethod::Delete),
            Method::Delete
        ));
    }

    #[test]
    fn test_new_rejects_invalid_host() {
        let config = ClientConfig::default().with_host("not a url");

        let result = OpenSearchTransport::new(&config);

        assert!(matches!(result, Err(SearchError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let config = ClientConfig::default()
            .with_host("http://127.0.0.1:1")
            .with_timeout(Duration::from_secs(2));
        let transport = OpenSearchTransport::new(&config).unwrap();

        let result = transport
            .send(EngineRequest::get(Endpoint::root(&config)))
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_silent_engine_hits_configured_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(socket);
        });

        let config = ClientConfig::default()
            .with_host(format!("http://{addr}"))
            .with_timeout(Duration::from_millis(300));
        let transport = OpenSearchTransport::new(&config).unwrap();

        let result = transport
            .send(EngineRequest::get(Endpoint::root(&config)))
            .await;

        assert!(
            matches!(result, Err(TransportError::Timeout(_))),
            "{result:?}"
        );
        server.abort();
    }

    #[tokio::test]
    async fn test_request_line_and_content_type_on_the_wire() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut chunk = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&chunk[..n]);
            }
            socket
                .write_all(
                    b"HTTP/1.1 404 Not Found\r\ncontent-type: application/json\r\n\
                      content-length: 20\r\nconnection: close\r\n\r\n{\"result\":\"missing\"}",
                )
                .await
                .unwrap();
            String::from_utf8_lossy(&head).to_lowercase()
        });

        let config = ClientConfig::default()
            .with_host(format!("http://{addr}/es/"))
            .with_timeout(Duration::from_secs(5));
        let transport = OpenSearchTransport::new(&config).unwrap();

        let reply = transport
            .send(EngineRequest::delete(Endpoint::document(&config, 42)))
            .await
            .unwrap();
        let head = server.await.unwrap();

        assert!(
            head.starts_with("delete /es/docbook/book/42 http/1.1\r\n"),
            "{head}"
        );
        assert!(head.contains("content-type: application/json\r\n"), "{head}");
        assert_eq!(reply.status, 404);
        assert_eq!(reply.status_text, "Not Found");
        assert_eq!(reply.body, r#"{"result":"missing"}"#);
    }
}
