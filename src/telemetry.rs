//! Opt-in `tracing` bootstrap.
//!
//! Render and builder events are emitted unconditionally through `tracing`
//! and go nowhere until a subscriber exists. Host applications usually
//! install their own; `init_default_tracing` covers the standalone case
//! (examples, benches, one-off scripts) behind the `telemetry` feature.

/// Installs a compact env-filtered subscriber, defaulting to `info`.
///
/// Returns `true` when the subscriber was installed, `false` when the
/// `telemetry` feature is off or a global subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
