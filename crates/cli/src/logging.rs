//! Logging setup for the demo CLI.

/// Console logging at INFO by default; RUST_LOG overrides.
pub fn init_cli_logging() {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
    .init();
}
