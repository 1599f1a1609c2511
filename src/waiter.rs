use tokio::time::{sleep, Duration, Instant};
use tracing::{debug, info};

use crate::prober::tcp_connect::probe_tcp;
use crate::util::display_target;

pub const POLL_INTERVAL: Duration = Duration::from_secs(1);
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub succeeded: bool,
    pub elapsed_secs: u64,
}

/// Polls a single `host:port` until a TCP connect succeeds.
#[derive(Debug, Clone)]
pub struct PortWaiter {
    host: String,
    port: u16,
    interval: Duration,
    connect_timeout: Duration,
}

impl PortWaiter {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            interval: POLL_INTERVAL,
            connect_timeout: CONNECT_TIMEOUT,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn target(&self) -> String {
        display_target(&self.host, self.port)
    }

    /// Returns only once the target accepted a connection. Failed probes
    /// are logged and retried after `interval`; callers bound the wait by
    /// dropping the future.
    pub async fn wait(&self) -> ProbeOutcome {
        let start = Instant::now();
        let mut attempt: u64 = 0;
        loop {
            attempt += 1;
            match probe_tcp(&self.host, self.port, self.connect_timeout).await {
                Ok(latency) => {
                    let elapsed_secs = start.elapsed().as_secs();
                    debug!(attempt, ?latency, "tcp connect to {} succeeded", self.target());
                    info!("{} is available after {} seconds", self.target(), elapsed_secs);
                    return ProbeOutcome {
                        succeeded: true,
                        elapsed_secs,
                    };
                }
                Err(e) => {
                    debug!(attempt, "tcp connect to {} failed: {}", self.target(), e);
                }
            }
            sleep(self.interval).await;
        }
    }
}
