use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::AppError;

const DEFAULT_FILTER: &str = "info";

/// Sends `tracing` output to `path`, appending plain lines.
///
/// The filter defaults to `info` and honours `RUST_LOG`. Logs never go to
/// the terminal because the game owns the alternate screen.
pub fn init_file_logging(path: &Path) -> Result<(), AppError> {
    let file = open_log_file(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish()
        .try_init()?;

    Ok(())
}

fn open_log_file(path: &Path) -> Result<File, AppError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::LogFile {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use crate::error::AppError;

    use super::{init_file_logging, open_log_file};

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir().join(format!("grid-snake-{label}-{nanos}.log"))
    }

    #[test]
    fn log_file_is_created_on_open() {
        let path = unique_test_path("create");

        open_log_file(&path).expect("log file should open");

        assert!(path.exists());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn second_logger_install_keeps_its_cause() {
        let first = unique_test_path("first-logger");
        let second = unique_test_path("second-logger");

        // Another test may already own the global subscriber; either way the
        // second install must fail.
        let _ = init_file_logging(&first);
        let error = init_file_logging(&second).expect_err("global subscriber already set");

        assert!(matches!(error, AppError::Logger(_)));
        assert!(std::error::Error::source(&error).is_some());
        let _ = fs::remove_file(&first);
        let _ = fs::remove_file(&second);
    }

    #[test]
    fn missing_directory_reports_log_file_error() {
        let path = unique_test_path("missing-dir").join("game.log");

        let error = open_log_file(&path).expect_err("parent directory does not exist");

        assert!(matches!(error, AppError::LogFile { .. }));
        assert!(error.to_string().contains("game.log"));
    }
}
