//! Logging setup using `tracing` and `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

use crate::cli::LogLevelArg;

/// Initializes the global subscriber on stderr.
///
/// The `REHEARSE_LOG` environment variable takes precedence over the CLI
/// level and accepts full `EnvFilter` directives.
pub fn init(level: LogLevelArg) {
    let default = match level {
        LogLevelArg::Error => "error",
        LogLevelArg::Warn => "warn",
        LogLevelArg::Info => "info",
        LogLevelArg::Debug => "debug",
        LogLevelArg::Trace => "trace",
    };
    let filter = EnvFilter::try_from_env("REHEARSE_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
