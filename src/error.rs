//! Error type and crate-wide result alias.

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the executor.
///
/// Only submission and construction can fail. A panic inside a task body
/// is not part of this taxonomy: it is caught inside the worker loop and
/// never surfaced to any caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No task was supplied to `submit`.
    #[error("no task was supplied")]
    AbsentTask,

    /// The executor has begun shutting down or is already disposed;
    /// submissions are rejected, not silently dropped.
    #[error("executor is shut down")]
    Shutdown,

    /// Invalid configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Worker thread could not be spawned.
    #[error("executor error: {0}")]
    Executor(String),
}

impl Error {
    /// Build an [`Error::Config`] from any message.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Build an [`Error::Executor`] from any message.
    pub fn executor<S: Into<String>>(msg: S) -> Self {
        Error::Executor(msg.into())
    }
}
