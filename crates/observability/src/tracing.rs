//! Tracing/logging initialization.
//!
//! Native processes log JSON lines to stderr. In the browser there is no
//! stderr and no system clock, so events go to the devtools console (at the
//! matching console level) as plain text without timestamps.

use tracing_subscriber::EnvFilter;

/// Parse `directive`, falling back to `info` when it is malformed.
pub fn filter_from(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
#[cfg(not(target_arch = "wasm32"))]
pub fn init(directive: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_from(directive))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Initialize tracing/logging for the browser.
///
/// Safe to call multiple times (subsequent calls are no-ops).
#[cfg(target_arch = "wasm32")]
pub fn init(directive: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_from(directive))
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_writer(tracing_web::MakeWebConsoleWriter::new())
        .try_init();
}
