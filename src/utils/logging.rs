use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Route diagnostics to stderr so stdout stays parseable.
///
/// `RUST_LOG` takes precedence; otherwise `--debug` picks `debug` over `warn`.
pub(crate) fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(debug)
                .without_time(),
        )
        .try_init();
}
