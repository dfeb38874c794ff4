use crate::config::LoggingConfig;
use anyhow::{anyhow, Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Layer, Registry};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `cfg.level`. The returned guard flushes the file sink
/// and must live until shutdown.
pub fn init_logging(cfg: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&cfg.level)
            .with_context(|| format!("Invalid log level '{}'", cfg.level))?,
    };

    let mut layers: Vec<BoxedLayer> = Vec::new();

    let console = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());
    if cfg.json {
        layers.push(console.json().boxed());
    } else {
        layers.push(console.boxed());
    }

    let guard = match cfg.file.as_deref() {
        Some(file) if !file.trim().is_empty() => {
            let (writer, guard) = tracing_appender::non_blocking(daily_appender(file)?);
            layers.push(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_target(true)
                    .with_timer(fmt::time::UtcTime::rfc_3339())
                    .with_writer(writer)
                    .boxed(),
            );
            Some(guard)
        }
        _ => None,
    };

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

fn daily_appender(file: &str) -> Result<tracing_appender::rolling::RollingFileAppender> {
    let path = Path::new(file);
    let prefix = path
        .file_name()
        .ok_or_else(|| anyhow!("Log file path has no file name: {}", file))?;
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    Ok(tracing_appender::rolling::daily(dir, prefix))
}
