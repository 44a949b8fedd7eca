//! Engine transport trait definition.
//!
//! The transport moves one request to the engine and brings back its raw
//! reply. Connection handling, TLS and pooling belong to implementations;
//! deciding what a reply means belongs to the caller.

use async_trait::async_trait;
use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::errors::TransportError;

/// HTTP methods used against the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
}

/// A single request to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineRequest {
    pub method: HttpMethod,
    pub endpoint: Endpoint,
    /// JSON body, sent with `Content-Type: application/json`.
    pub body: Option<Value>,
}

impl EngineRequest {
    pub fn get(endpoint: Endpoint) -> Self {
        Self {
            method: HttpMethod::Get,
            endpoint,
            body: None,
        }
    }

    pub fn delete(endpoint: Endpoint) -> Self {
        Self {
            method: HttpMethod::Delete,
            endpoint,
            body: None,
        }
    }

    pub fn put(endpoint: Endpoint, body: Value) -> Self {
        Self {
            method: HttpMethod::Put,
            endpoint,
            body: Some(body),
        }
    }

    pub fn post(endpoint: Endpoint, body: Value) -> Self {
        Self {
            method: HttpMethod::Post,
            endpoint,
            body: Some(body),
        }
    }
}

/// The engine's raw answer, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineReply {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl EngineReply {
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }
}

/// Abstracts the HTTP transport used to reach the engine.
///
/// Implementations must bound every call by their configured timeout and
/// report a call that produced no reply as a `TransportError`. A reply with
/// any status, including errors, is returned as `Ok`.
///
/// Implementations must be `Send + Sync` so one client can serve concurrent
/// callers.
#[async_trait]
pub trait EngineTransport: Send + Sync {
    /// Send one request and return the engine's reply.
    ///
    /// # Returns
    ///
    /// * `Ok(EngineReply)` - The engine answered, whatever the status
    /// * `Err(TransportError)` - The call could not be completed
    async fn send(&self, request: EngineRequest) -> Result<EngineReply, TransportError>;
}
