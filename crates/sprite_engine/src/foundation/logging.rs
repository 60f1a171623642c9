//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn, LevelFilter};

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence; `level` is the filter used when the
/// environment does not set one. Unknown level names fall back to `info`.
pub fn init(level: &str) {
    let filter = level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info);

    let mut builder = env_logger::Builder::new();
    builder.filter_level(filter);
    builder.parse_default_env();

    // A second init (tests, embedding apps) keeps the first logger.
    if builder.try_init().is_err() {
        log::debug!("Logger already initialized, keeping existing configuration");
    }
}
