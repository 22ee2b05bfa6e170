use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

fn build_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global JSON subscriber; `RUST_LOG` overrides the default `info` level.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        // module names only add noise to the json lines.
        .with_target(false)
        .with_ansi(false)
        // the log collector stamps ingestion time.
        .without_time()
        .json()
        .init();
}
