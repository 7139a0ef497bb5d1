use crate::errors::{Result, TransferError};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// A handle on where the diagnostics of a calculation are written.
///
/// Nothing is installed globally, the handle is passed to
/// [`compute_transfer`](crate::analysis::compute_transfer) which runs with
/// it as the default subscriber. Dropping the handle closes the sink.
#[derive(Clone)]
pub struct Diagnostics {
    dispatch: Dispatch,
}

impl Diagnostics {
    /// Writes events at `level` and above ("error", "warn", "info", "debug"
    /// or "trace", or any filter directive) to `writer`.
    pub fn with_writer<W>(writer: W, level: &str) -> Result<Self>
        where W: for<'w> MakeWriter<'w> + Send + Sync + 'static
    {
        Ok(Self::build(writer, filter(level)?))
    }

    /// Truncates the file at `path` and writes the diagnostics into it.
    /// A valid RUST_LOG takes precedence over `level`.
    pub fn to_file(path: impl AsRef<Path>, level: &str) -> Result<Self> {
        let path = path.as_ref();
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => filter(level)?,
        };
        let file = File::create(path).map_err(|e| TransferError::io(path, e))?;
        Ok(Self::build(Mutex::new(file), filter))
    }

    /// Discards all diagnostics.
    pub fn silent() -> Self {
        Self { dispatch: Dispatch::none() }
    }

    fn build<W>(writer: W, filter: EnvFilter) -> Self
        where W: for<'w> MakeWriter<'w> + Send + Sync + 'static
    {
        let subscriber = tracing_subscriber::fmt().with_writer(writer)
                                                  .with_ansi(false)
                                                  .with_env_filter(filter)
                                                  .finish();
        Self { dispatch: Dispatch::new(subscriber) }
    }

    /// Runs `f` with this handle receiving every event emitted on the
    /// current thread.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}

/// Parses a level or filter directive.
fn filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).map_err(|e| TransferError::Filter { directive: level.to_string(),
                                                                  message: e.to_string() })
}
