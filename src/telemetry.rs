//! Opt-in tracing setup for hosts embedding `ruler-charts`.
//!
//! The engine emits `tracing` events on recenter, reset and resize, but
//! nothing is recorded until a subscriber is installed. Hosts with their
//! own telemetry stack wire `tracing` themselves and skip this module.

/// Installs a compact `fmt` subscriber honoring `RUST_LOG`, falling back
/// to `info` for this crate's mutation events.
///
/// Returns `true` when the subscriber was installed. Returns `false` when
/// the `telemetry` feature is disabled or a global subscriber already
/// exists.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("ruler_charts=info"));
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_rejected_or_noop() {
        let _ = init_default_tracing();
        assert!(!init_default_tracing());
    }
}
