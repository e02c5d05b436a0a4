//! Startup and serving errors for the site binary.

use std::net::SocketAddr;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// `[package.metadata.leptos]` or `LEPTOS_*` settings could not be loaded.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
