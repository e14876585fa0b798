//! Tracing setup for the dashboard binaries.

/// Initializes a compact fmt subscriber filtered via `RUST_LOG`.
///
/// Falls back to `info` when the environment does not set a filter.
pub fn init_default_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();
}
