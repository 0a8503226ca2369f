use thiserror::Error;

/// Custom error types for triemaster
#[derive(Debug, Error)]
pub enum TrieError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid URL for {field}: {reason}")]
    InvalidUrl { field: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
