use env_logger::Builder;
use log::SetLoggerError;

/// Installs the global logger from `filters`, then from `RUST_LOG` when set.
pub fn init(filters: &str) -> Result<(), SetLoggerError> {
    Builder::new()
        .parse_filters(filters)
        .parse_default_env()
        .try_init()
}
