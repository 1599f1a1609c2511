use std::io;
use std::time::Duration;

use thiserror::Error;

/// Exit status used for usage and configuration errors.
pub const EXIT_USAGE: i32 = 1;
/// Exit status used when the deadline elapsed before the target accepted.
pub const EXIT_TIMEOUT: i32 = 124;
/// Exit status used when the trailing command exists but could not be run.
pub const EXIT_CANNOT_EXEC: i32 = 126;
/// Exit status used when the trailing command could not be found.
pub const EXIT_NOT_FOUND: i32 = 127;
/// Exit status used when the wait was interrupted (128 + SIGINT).
pub const EXIT_INTERRUPTED: i32 = 130;

#[derive(Error, Debug)]
pub enum WaitError {
    #[error("{0}")]
    Usage(String),
    #[error("config error: {0:#}")]
    Config(#[from] anyhow::Error),

    #[error("timeout occurred after waiting {} seconds for {target}", .after.as_secs())]
    TimedOut { target: String, after: Duration },
    #[error("interrupted while waiting for {target}")]
    Interrupted { target: String },

    /// the probe failed with `status` and strict mode withheld the command
    #[error("strict mode, refusing to execute subprocess")]
    StrictRefusal { status: i32 },
    #[error("failed to execute {program}: {source}")]
    Exec {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl WaitError {
    pub fn exit_code(&self) -> i32 {
        match self {
            WaitError::Usage(_) | WaitError::Config(_) => EXIT_USAGE,
            WaitError::TimedOut { .. } => EXIT_TIMEOUT,
            WaitError::Interrupted { .. } => EXIT_INTERRUPTED,
            WaitError::StrictRefusal { status } => *status,
            WaitError::Exec { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                EXIT_NOT_FOUND
            }
            WaitError::Exec { .. } => EXIT_CANNOT_EXEC,
        }
    }
}
