//! Beacon - a minimal HTTPS responder for container-orchestration health checks.
//!
//! Exposes two static JSON endpoints over TLS: `GET /health` for load-balancer
//! liveness probes and `GET /` for service identification. Everything else is
//! configuration and a thin routing layer.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
