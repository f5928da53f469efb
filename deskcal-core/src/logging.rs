//! Log output for the deskcal binaries.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `DESKCAL_LOG=debug`.
pub const LOG_ENV: &str = "DESKCAL_LOG";

/// Install a stderr subscriber.
///
/// The filter comes from `DESKCAL_LOG`, then `RUST_LOG`, then `default`.
/// Calling this more than once is harmless.
pub fn init_logging(default: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
