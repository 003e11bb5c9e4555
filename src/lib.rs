use tracing_subscriber::EnvFilter;

pub mod ai;
pub mod app;
pub mod config;
pub mod controllers;
pub mod display;
pub mod domain;

/// Logs to stdout, filtered by $RUST_LOG (info when unset).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
