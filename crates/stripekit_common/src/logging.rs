//! Logging utilities for StripeKit.
//!
//! The library itself only emits `tracing` events. Binaries, examples and
//! tests that want to see them call [`init`] or [`init_with_level`] once at
//! start-up.

use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at INFO level.
///
/// # Examples
///
/// ```
/// use stripekit_common::logging;
///
/// // Initialize with default log level (INFO)
/// logging::init();
///
/// // A second call is a no-op
/// logging::init_with_level(tracing::Level::DEBUG);
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` still applies; the level is added as a directive for the
/// `stripekit` targets. Calling this more than once keeps the first
/// subscriber.
///
/// # Arguments
///
/// * `level` - The minimum log level to display for StripeKit targets.
pub fn init_with_level(level: Level) {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("stripekit={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    // try_init: a global default subscriber may already be set
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Log an error with context at the ERROR level.
///
/// # Arguments
///
/// * `error` - The error to log.
/// * `context` - Additional context information about the error.
pub fn log_error<E: std::fmt::Display>(error: E, context: &str) {
    error!("{}: {}", context, error);
}

/// Log a result, with different messages for success and error cases.
///
/// Logs `success_message` at INFO if the result is Ok, or the error with
/// `error_context` at ERROR otherwise. Returns the original result so the
/// call can sit in a chain.
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
    fn init_twice_does_not_panic() {
        init();
        init_with_level(Level::DEBUG);
    }

    #[test]
    fn log_result_passes_value_through() {
        let ok: Result<u32, String> = Ok(7);
        assert_eq!(log_result(ok, "done", "failed"), Ok(7));

        let err: Result<u32, String> = Err("boom".to_string());
        assert_eq!(log_result(err, "done", "failed"), Err("boom".to_string()));
    }
}
