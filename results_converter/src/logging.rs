//!
//! The terminal diagnostics setup.
//!

use tracing_subscriber::EnvFilter;

///
/// Installs the global `tracing` subscriber writing to the standard error.
///
/// The default level is `info`, or `warn` if `quiet` is set. `RUST_LOG` overrides the default level.
///
pub fn init(quiet: bool) {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(filter(quiet, directives.as_str()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

///
/// Builds the level filter from the `RUST_LOG`-style `directives`.
///
fn filter(quiet: bool, directives: &str) -> EnvFilter {
    let level = if quiet {
        tracing::Level::WARN
    } else {
        tracing::Level::INFO
    };
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(directives)
}
