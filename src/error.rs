use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing_subscriber::util::TryInitError;

/// Failures of the terminal shell around the game.
///
/// The simulation itself has no recoverable errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("cannot open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot install logger: {0}")]
    Logger(#[from] TryInitError),
}
