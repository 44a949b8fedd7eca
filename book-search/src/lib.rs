//! # Book Search
//!
//! Entry point and configuration for running the book search client from the
//! command line.

pub mod config;

pub use config::Dependencies;

use thiserror::Error;

/// Errors that can occur during startup or while running a command.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Search error.
    #[error("Search error: {0}")]
    SearchError(#[from] book_search_repository::SearchError),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
