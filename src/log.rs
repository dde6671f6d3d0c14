use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber. Everything stays quiet unless `-v`
/// or `RUST_LOG` says otherwise; log lines are only ever emitted
/// before the terminal switches to the alternate screen.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose { "kantor=debug" } else { "off" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(fmt::layer().pretty().without_time())
        .with(filter)
        .init();
}
