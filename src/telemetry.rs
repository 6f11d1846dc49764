//! Opt-in `tracing` setup for the CLI and for scripts driving `produce-lab`.
//!
//! Library code only emits events. Installing a subscriber is left to the
//! host, either through these helpers or through its own `tracing` setup.

/// Filter used when `RUST_LOG` is unset: crate events at `info`, the rest at
/// `warn`.
pub const DEFAULT_FILTER: &str = "warn,produce_lab=info";

/// Installs a compact stderr subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_FILTER)
}

/// Installs a compact stderr subscriber filtered by `RUST_LOG`, falling back to
/// `fallback_filter`.
///
/// Returns `false` without the `telemetry` feature, or when the process already
/// has a global subscriber.
#[must_use]
pub fn init_tracing(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback_filter))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
