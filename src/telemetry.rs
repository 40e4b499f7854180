/// Logging setup: console plus the append-only operational log file.
use crate::error::{BotError, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "mirrors_bot=info,teloxide=info";

/// Opens the log file for appending, creating it if needed. Existing
/// content is never truncated.
pub fn open_log_file(path: &Path) -> Result<File> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

/// Installs the global subscriber: console output plus the append-only log file.
pub fn init(log_file: &Path) -> Result<()> {
    let file = open_log_file(log_file)?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|e| BotError::Telemetry(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_log_file_is_appended_not_truncated() {
        let path = std::env::temp_dir().join(format!("mirrors-bot-{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);

        {
            let mut file = open_log_file(&path).unwrap();
            writeln!(file, "first").unwrap();
        }
        {
            let mut file = open_log_file(&path).unwrap();
            writeln!(file, "second").unwrap();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_unopenable_log_file_is_an_error() {
        let path = std::env::temp_dir()
            .join("mirrors-bot-missing-dir")
            .join("nested")
            .join("visitors.log");
        assert!(matches!(open_log_file(&path), Err(BotError::Io(_))));
    }
}
