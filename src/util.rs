// Helpers for turning `host:port` targets into their parts.

use crate::error::WaitError;

/// Split a `host:port` target on its last `:`.
///
/// A bracketed IPv6 literal such as `[::1]:5432` is unwrapped. A target
/// without a `:` is returned as a bare host.
pub fn parse_host_port(s: &str) -> Result<(String, Option<u16>), WaitError> {
    if let Some(rest) = s.strip_prefix('[') {
        if let Some((host, tail)) = rest.split_once(']') {
            return match tail.strip_prefix(':') {
                Some(port) => Ok((host.to_string(), Some(parse_port(port)?))),
                None if tail.is_empty() => Ok((host.to_string(), None)),
                None => Err(WaitError::Usage(format!("Invalid target: {s}"))),
            };
        }
    }
    match s.rfind(':') {
        Some(idx) => {
            let port = &s[idx + 1..];
            let port = if port.is_empty() {
                None
            } else {
                Some(parse_port(port)?)
            };
            Ok((s[..idx].to_string(), port))
        }
        None => Ok((s.to_string(), None)),
    }
}

pub fn parse_port(s: &str) -> Result<u16, WaitError> {
    match s.parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(WaitError::Usage(format!(
            "Invalid port: {s} (expected 1-65535)"
        ))),
    }
}

/// Render a target the way it is shown in status lines.
pub fn display_target(host: &str, port: u16) -> String {
    if host.contains(':') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}
