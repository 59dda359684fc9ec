//! nautobot-sd daemon
//!
//! Serves Prometheus HTTP service discovery targets built from Nautobot
//! device records.

pub mod api;
pub mod config;
pub mod router;
pub mod server;
pub mod state;

pub use config::{Config, DaemonConfig, LogFormat};
pub use router::create_router;
pub use state::AppState;
