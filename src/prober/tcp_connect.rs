use tokio::net::TcpStream;
use tokio::time::{timeout, Duration, Instant};

use super::ProbeError;

/// Open a TCP connection to `host:port` and close it again straight away.
///
/// Name resolution happens inside `connect`, so an unknown host is just
/// another failed probe.
pub async fn probe_tcp(host: &str, port: u16, connect_timeout: Duration) -> Result<Duration, ProbeError> {
    let start = Instant::now();
    let conn_fut = TcpStream::connect((host, port));
    let conn = timeout(connect_timeout, conn_fut)
        .await
        .map_err(|_| ProbeError::ConnectTimeout(connect_timeout))??;
    drop(conn);
    Ok(start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn connects_to_listening_port() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let latency = probe_tcp("127.0.0.1", port, Duration::from_secs(3)).await;
        assert!(latency.is_ok(), "probe failed: {latency:?}");
    }

    #[tokio::test]
    async fn refused_port_is_a_connect_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let err = probe_tcp("127.0.0.1", port, Duration::from_secs(3))
            .await
            .unwrap_err();
        assert!(matches!(err, ProbeError::Connect(_)));
    }

    #[tokio::test]
    async fn unresolvable_host_is_a_connect_error() {
        let err = probe_tcp("host.invalid", 80, Duration::from_secs(3))
            .await
            .unwrap_err();
        assert!(matches!(err, ProbeError::Connect(_) | ProbeError::ConnectTimeout(_)));
    }
}
