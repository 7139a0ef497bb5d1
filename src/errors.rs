use std::path::PathBuf;
use thiserror::Error;

/// A type to simplify the results of the library functions.
pub type Result<T> = std::result::Result<T, TransferError>;

/// Errors raised while reading the densities or computing the transfer.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The file could not be opened, read or written.
    #[error("Unable to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not a valid cube file.
    /// Parse { path, line, message } where line is 1-based, 0 for the whole file.
    #[error("Cannot read {} as cube file (line {line}): {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
    /// The two densities are not sampled on grids of the same size.
    #[error("Mismatch in grid size between ground state {ground:?} and excited state {excited:?}.")]
    ShapeMismatch {
        ground: [usize; 3],
        excited: [usize; 3],
    },
    /// The grids have the same size but a different origin or spacing.
    #[error("Mismatch in grid geometry between ground state and excited state: {ground} vs {excited}.")]
    GeometryMismatch { ground: String, excited: String },
    /// The log level is not a valid filter directive.
    #[error("Invalid log level \"{directive}\": {message}")]
    Filter { directive: String, message: String },
    /// A worker thread failed to finish.
    #[error("Worker thread failed: {0}")]
    Worker(String),
}

impl TransferError {
    /// Builds a [`TransferError::Parse`] for the file at `path`.
    pub fn parse(path: impl Into<PathBuf>,
                 line: usize,
                 message: impl Into<String>)
                 -> Self {
        Self::Parse { path: path.into(),
                      line,
                      message: message.into() }
    }

    /// Builds a [`TransferError::Io`] for the file at `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(),
                   source }
    }

    /// Builds the error for a failed read of the contents of `path`.
    ///
    /// Bytes that are not UTF-8 are malformed contents, not an unreadable
    /// file, and become a [`TransferError::Parse`] at `line`.
    pub fn read(path: impl Into<PathBuf>,
                line: usize,
                source: std::io::Error)
                -> Self {
        match source.kind() {
            std::io::ErrorKind::InvalidData => {
                Self::parse(path, line, format!("invalid UTF-8 in file: {}", source))
            }
            _ => Self::io(path, source),
        }
    }
}
