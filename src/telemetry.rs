use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins, then `LOG_LEVEL`, then `default_level`. Logs go to
/// stderr so stdout stays clean for results and JSON output.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_env("RUST_LOG")
        .or_else(|_| EnvFilter::try_from_env("LOG_LEVEL"))
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
