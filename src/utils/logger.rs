use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber
///
/// The filter is taken from the `LOGLEVEL` environment variable and falls
/// back to `info`. Calling this more than once is harmless; subsequent calls
/// are no-ops.
pub fn setup_logger() {
    let filter = EnvFilter::try_from_env("LOGLEVEL").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
