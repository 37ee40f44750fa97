//! Logging setup: stderr plus a daily-rotating file

use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
///
/// Returns the appender guard; dropping it flushes buffered file output,
/// so the caller holds it for the life of the process.
pub fn init(log_dir: &Path) -> anyhow::Result<WorkerGuard> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::daily(log_dir, "wakecast.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_daily_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let guard = init(dir.path()).unwrap();

        tracing::info!("log file smoke test");
        // Dropping the guard flushes the non-blocking writer
        drop(guard);

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .flatten()
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        assert!(
            names.iter().any(|n| n.starts_with("wakecast.log")),
            "expected a wakecast.log.* file, found {names:?}"
        );
    }
}
