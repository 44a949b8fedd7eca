//! Interface definitions for the engine transport.
//!
//! This module defines the abstract `EngineTransport` trait so the client can
//! be driven by the OpenSearch transport in production and by an in-memory
//! engine in tests.

mod engine_transport;

pub use engine_transport::{EngineReply, EngineRequest, EngineTransport, HttpMethod};
