//! Logging to stderr.

use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber at `level`.
///
/// `RUST_LOG`, when set, takes precedence over `level`.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("argot={level},argot_core={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .ok();
}
