use dns_dispatch_domain::Config;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr; stdout carries the lookup results.
pub fn init_logging(config: &Config) {
    let (filter, invalid) = match EnvFilter::try_new(&config.logging.level) {
        Ok(filter) => (filter, false),
        Err(_) => (EnvFilter::new("info"), true),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_ansi(config.logging.ansi)
        .with_writer(std::io::stderr)
        .init();

    if invalid {
        warn!(level = %config.logging.level, "Invalid log level, using info");
    }
    debug!("Logging initialized at level: {}", config.logging.level);
}
