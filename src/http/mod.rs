//! HTTPS server module.
//!
//! The server is TLS-only: certificates are loaded from the configured paths
//! before the listener binds, and startup fails if they cannot be read. There
//! is no plaintext fallback.
//!
//! The server includes graceful shutdown on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
