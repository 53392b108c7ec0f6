use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

/// Уровень по умолчанию, если не заданы ни `RUST_LOG`, ни `LOG_LEVEL`.
pub const DEFAULT_LEVEL: &str = "warn";

/// Подключает вывод `tracing` в stderr.
///
/// `RUST_LOG` имеет приоритет над `default_level`.
pub fn init_logging(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(())
}
