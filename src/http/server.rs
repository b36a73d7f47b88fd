//! HTTPS server startup logic.
//!
//! Loads the TLS certificate/key pair from the configured paths, then binds
//! and serves. TLS material is loaded before the listener binds, so a missing
//! or unreadable certificate can never leave a plaintext socket listening.

use std::net::SocketAddr;

use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    #[error("Failed to load TLS configuration: {0}")]
    TlsConfig(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// Start the HTTPS server.
///
/// This function blocks until the server shuts down. It returns an error
/// before binding if the TLS material cannot be loaded; the caller is
/// expected to treat that as fatal.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port)
        .parse()
        .map_err(|e| ServerError::TlsConfig(format!("Invalid http.host or http.port: {}", e)))?;

    let cert_path = &config.tls.cert_path;
    let key_path = &config.tls.key_path;

    tracing::info!(%addr, cert = %cert_path, key = %key_path, "Starting HTTPS server");

    // Load TLS material first; the listener must never bind without it
    let rustls_config = RustlsConfig::from_pem_file(cert_path, key_path)
        .await
        .map_err(|e| ServerError::TlsConfig(format!("Failed to load certificates: {}", e)))?;

    let handle = Handle::new();
    shutdown::setup_shutdown_handler(handle.clone());

    tracing::info!(port = config.http.port, "HTTPS server running");

    axum_server::bind_rustls(addr, rustls_config)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))
}
