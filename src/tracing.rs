use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// RUST_LOG drives the filter; CI runs without it, so fall back to info.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}
