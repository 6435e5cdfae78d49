//! Logging utilities for payflow.
//!
//! Every crate logs through `tracing`; binaries call [`init`] or
//! [`init_with_level`] once at startup to install the subscriber.

use tracing::{error, info, Level, Subscriber};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at INFO.
///
/// # Examples
///
/// ```
/// use payflow_common::logging;
///
/// logging::init();
/// logging::init_with_level(tracing::Level::DEBUG); // no-op, already initialized
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` directives are honoured; the `payflow` target is always added
/// at `level`. Calling this more than once is harmless.
pub fn init_with_level(level: Level) {
    if build_subscriber(level).try_init().is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Run `f` with a subscriber at `level` installed for the current thread only.
///
/// For startup work that logs before the configured level is known, such as
/// loading the configuration. The global subscriber can still be set afterwards.
pub fn with_scoped_logging<T>(level: Level, f: impl FnOnce() -> T) -> T {
    tracing::subscriber::with_default(build_subscriber(level), f)
}

fn build_subscriber(level: Level) -> impl Subscriber + Send + Sync + 'static {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("payflow={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
}

/// Parse a configured level name, falling back to INFO for unknown values.
pub fn parse_level(level: Option<&str>) -> Level {
    level
        .and_then(|name| name.parse::<Level>().ok())
        .unwrap_or(Level::INFO)
}

/// Log a result, INFO on success and ERROR on failure, and hand it back.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(Some("debug")), Level::DEBUG);
        assert_eq!(parse_level(Some("WARN")), Level::WARN);
        assert_eq!(parse_level(Some("chatty")), Level::INFO);
        assert_eq!(parse_level(None), Level::INFO);
    }

    #[test]
    fn test_scoped_logging_applies_level() {
        assert!(with_scoped_logging(Level::DEBUG, || tracing::enabled!(Level::DEBUG)));
        assert!(!with_scoped_logging(Level::WARN, || tracing::enabled!(Level::DEBUG)));
        assert!(with_scoped_logging(Level::WARN, || tracing::enabled!(Level::WARN)));
    }

    #[test]
    fn test_scoped_logging_returns_value() {
        let loaded: Result<u8, String> = with_scoped_logging(Level::INFO, || {
            tracing::warn!("missing secret");
            Ok(3)
        });
        assert_eq!(loaded, Ok(3));
    }

    #[test]
    fn test_log_result_passes_through() {
        let ok: Result<u8, String> = Ok(7);
        assert_eq!(log_result(ok, "done", "failed"), Ok(7));

        let err: Result<u8, String> = Err("boom".to_string());
        assert_eq!(log_result(err, "done", "failed"), Err("boom".to_string()));
    }
}
