use env_logger::{Builder, Env};

/// Sets up `env_logger` for the binary.
///
/// Logs at `info` unless `RUST_LOG` says otherwise.
pub fn bootstrap_logging() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();
}
