use tokio::sync::watch;
use tracing::{debug, error};

/// Resolves once the user asks us to stop: Ctrl-C everywhere, SIGTERM on Unix.
pub async fn interrupted() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut term = match signal(SignalKind::terminate()) {
            Ok(term) => term,
            Err(e) => {
                error!("failed to listen for SIGTERM: {}", e);
                ctrl_c().await;
                return;
            }
        };
        tokio::select! {
            _ = ctrl_c() => {}
            _ = term.recv() => debug!("received SIGTERM"),
        }
    }
    #[cfg(not(unix))]
    ctrl_c().await;
}

async fn ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => debug!("received interrupt"),
        Err(e) => {
            error!("failed to listen for interrupt: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

/// Spawn the signal listener and hand back the receiving end of the
/// cancellation channel it flips.
pub fn spawn_cancellation() -> watch::Receiver<bool> {
    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move {
        interrupted().await;
        let _ = tx.send(true);
    });
    rx
}
