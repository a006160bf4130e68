//! Tracing subscriber setup shared by service binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Pick the filter directive: `verbose` forces debug, otherwise `RUST_LOG`
/// wins over the configured level.
pub fn filter_directive(verbose: bool, configured: &str) -> String {
    if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| configured.to_string())
    }
}

/// Initialize tracing subscriber
pub fn init(verbose: bool, configured: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::new(filter_directive(verbose, configured)))
        .init();
}
