//! Server error type.

use std::net::SocketAddr;

/// Failure while starting or running the HTTP host.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable holds a value that cannot be parsed.
    #[error("invalid {var}: {value:?}")]
    Config { var: &'static str, value: String },
    /// `[package.metadata.leptos]` or the `LEPTOS_*` environment is unusable.
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}
