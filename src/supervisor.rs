//! Deadline supervision for the probe loop.
//!
//! The waiter itself has no notion of time running out. [`Supervisor::run`]
//! races it against an optional deadline and a cancellation channel; whichever
//! finishes first decides the [`Verdict`] and the other branches are dropped,
//! which stops the probe loop mid-sleep or mid-connect.

use std::future::{pending, Future};

use tokio::sync::watch;
use tokio::time::{sleep, Duration};
use tracing::warn;

use crate::error::{WaitError, EXIT_INTERRUPTED, EXIT_TIMEOUT};
use crate::waiter::ProbeOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Succeeded(ProbeOutcome),
    TimedOut(Duration),
    Interrupted,
}

impl Verdict {
    pub fn succeeded(&self) -> bool {
        matches!(self, Verdict::Succeeded(outcome) if outcome.succeeded)
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Verdict::Succeeded(_) => 0,
            Verdict::TimedOut(_) => EXIT_TIMEOUT,
            Verdict::Interrupted => EXIT_INTERRUPTED,
        }
    }

    /// The failure this verdict stands for, if any.
    pub fn into_error(self, target: &str) -> Option<WaitError> {
        match self {
            Verdict::Succeeded(_) => None,
            Verdict::TimedOut(after) => Some(WaitError::TimedOut {
                target: target.to_string(),
                after,
            }),
            Verdict::Interrupted => Some(WaitError::Interrupted {
                target: target.to_string(),
            }),
        }
    }
}

pub struct Supervisor {
    deadline: Option<Duration>,
    cancel: watch::Receiver<bool>,
}

impl Supervisor {
    /// `deadline` of `None` means wait without a time limit; cancellation
    /// still applies.
    pub fn new(deadline: Option<Duration>, cancel: watch::Receiver<bool>) -> Self {
        Self { deadline, cancel }
    }

    pub async fn run<F>(mut self, target: &str, probe: F) -> Verdict
    where
        F: Future<Output = ProbeOutcome>,
    {
        let deadline = self.deadline;
        let timer = async move {
            match deadline {
                Some(after) => {
                    sleep(after).await;
                    after
                }
                None => pending().await,
            }
        };
        let cancelled = async {
            // a dropped sender can never cancel
            if self.cancel.wait_for(|cancelled| *cancelled).await.is_err() {
                pending::<()>().await;
            }
        };

        let verdict = tokio::select! {
            biased;
            _ = cancelled => Verdict::Interrupted,
            outcome = probe => Verdict::Succeeded(outcome),
            after = timer => Verdict::TimedOut(after),
        };

        if let Some(err) = verdict.into_error(target) {
            warn!("{}", err);
        }
        verdict
    }
}
