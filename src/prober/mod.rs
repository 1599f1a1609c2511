use std::io;
use std::time::Duration;

use thiserror::Error;

pub mod tcp_connect;

/// Why a single probe did not reach the target. Always transient: the
/// waiter logs it and tries again on the next tick.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("connect failed: {0}")]
    Connect(#[from] io::Error),
    #[error("connect timed out after {0:?}")]
    ConnectTimeout(Duration),
}
