use tracing_log::LogTracer;
use tracing_subscriber::{fmt, EnvFilter};

/// Used when `RUST_LOG` is unset. sqlx logs every statement at INFO.
pub const DEFAULT_FILTER: &str = "info,tower_http=info,sqlx=warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Installs the global subscriber and routes `log` records (emitted by
/// sqlx) into it. Respects `RUST_LOG`.
pub fn init(format: LogFormat) -> anyhow::Result<()> {
    LogTracer::init()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = fmt().with_env_filter(filter);

    match format {
        LogFormat::Pretty => tracing::subscriber::set_global_default(builder.finish())?,
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish())?,
    }

    Ok(())
}
