#![allow(dead_code)]

use std::net::TcpListener;
use std::process::{Child, Command, ExitStatus, Output, Stdio};
use std::thread::sleep;
use std::time::{Duration, Instant};

pub fn waitfor() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_waitfor"));
    cmd.env_remove("WAITFOR_CONFIG")
        .env_remove("WAITFOR_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

pub fn run(args: &[&str]) -> (Output, Duration) {
    let start = Instant::now();
    let output = waitfor()
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("failed to run waitfor");
    (output, start.elapsed())
}

pub fn spawn(args: &[&str]) -> Child {
    waitfor()
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn waitfor")
}

/// A listener that stays open for the life of the test. The kernel
/// completes handshakes into the backlog without us calling accept.
pub fn listening() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let target = format!("127.0.0.1:{}", listener.local_addr().unwrap().port());
    (listener, target)
}

/// An address with nothing listening on it.
pub fn closed() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("127.0.0.1:{port}")
}

/// Poll `child` until it exits or `limit` passes.
pub fn wait_with_limit(child: &mut Child, limit: Duration) -> Option<ExitStatus> {
    let start = Instant::now();
    while start.elapsed() < limit {
        if let Some(status) = child.try_wait().expect("try_wait") {
            return Some(status);
        }
        sleep(Duration::from_millis(50));
    }
    None
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
