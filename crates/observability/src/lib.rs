//! Tracing/logging setup shared by every stockroom entry point.

/// Initialize process-wide tracing with the given filter directive.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(filter: &str) {
    tracing::init(filter);
}

/// Tracing configuration (filters, layers, writers).
pub mod tracing;
