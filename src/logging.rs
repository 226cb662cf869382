use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr, filtered by `RUST_LOG` (default `warn`).
///
/// Progress lines go to stdout through the runner, so the default filter
/// only surfaces warnings here.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Ignore a second init (tests may have installed a subscriber already).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
