use tracing::{debug, error};

use crate::error::WaitError;
use crate::supervisor::Verdict;

/// What to do once the wait is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No trailing command: exit with the probe's status.
    Exit(i32),
    /// Strict mode and the probe failed: withhold the command.
    Refuse(i32),
    /// Hand control to the trailing command.
    Exec(Vec<String>),
}

pub fn decide(verdict: &Verdict, strict: bool, command: &[String]) -> Action {
    let status = verdict.exit_code();
    if command.is_empty() {
        Action::Exit(status)
    } else if strict && !verdict.succeeded() {
        Action::Refuse(status)
    } else {
        Action::Exec(command.to_vec())
    }
}

/// Carry out `action` and return the exit status for the process. On Unix an
/// `Exec` that succeeds never returns.
pub async fn apply(action: Action) -> i32 {
    match action {
        Action::Exit(status) => status,
        Action::Refuse(status) => {
            let err = WaitError::StrictRefusal { status };
            error!("{}", err);
            err.exit_code()
        }
        Action::Exec(command) => match execute(&command).await {
            Ok(status) => status,
            Err(err) => {
                error!("{}", err);
                err.exit_code()
            }
        },
    }
}

/// Replace the current process with `command`, inheriting stdio.
#[cfg(unix)]
pub async fn execute(command: &[String]) -> Result<i32, WaitError> {
    use std::os::unix::process::CommandExt;

    let (program, args) = split_command(command)?;
    debug!(program, ?args, "exec");
    let source = std::process::Command::new(program).args(args).exec();
    Err(WaitError::Exec {
        program: program.to_string(),
        source,
    })
}

/// Run `command` to completion and forward its exit status.
#[cfg(not(unix))]
pub async fn execute(command: &[String]) -> Result<i32, WaitError> {
    let (program, args) = split_command(command)?;
    debug!(program, ?args, "spawn");
    let status = tokio::process::Command::new(program)
        .args(args)
        .status()
        .await
        .map_err(|source| WaitError::Exec {
            program: program.to_string(),
            source,
        })?;
    Ok(status.code().unwrap_or(1))
}

fn split_command(command: &[String]) -> Result<(&str, &[String]), WaitError> {
    match command.split_first() {
        Some((program, args)) => Ok((program.as_str(), args)),
        None => Err(WaitError::Usage("no command to execute".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EXIT_INTERRUPTED, EXIT_NOT_FOUND, EXIT_TIMEOUT};
    use crate::waiter::ProbeOutcome;
    use std::time::Duration;

    fn succeeded() -> Verdict {
        Verdict::Succeeded(ProbeOutcome {
            succeeded: true,
            elapsed_secs: 0,
        })
    }

    fn cmd(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn no_command_surfaces_probe_status() {
        assert_eq!(decide(&succeeded(), false, &[]), Action::Exit(0));
        assert_eq!(
            decide(&Verdict::TimedOut(Duration::from_secs(5)), true, &[]),
            Action::Exit(EXIT_TIMEOUT)
        );
    }

    #[test]
    fn strict_withholds_command_after_failure() {
        let echo = cmd(&["echo", "ready"]);
        assert_eq!(
            decide(&Verdict::TimedOut(Duration::from_secs(5)), true, &echo),
            Action::Refuse(EXIT_TIMEOUT)
        );
        assert_eq!(
            decide(&Verdict::Interrupted, true, &echo),
            Action::Refuse(EXIT_INTERRUPTED)
        );
        assert_eq!(decide(&succeeded(), true, &echo), Action::Exec(echo.clone()));
    }

    #[test]
    fn non_strict_runs_command_regardless() {
        let echo = cmd(&["echo", "ready"]);
        assert_eq!(
            decide(&Verdict::TimedOut(Duration::from_secs(5)), false, &echo),
            Action::Exec(echo.clone())
        );
        assert_eq!(decide(&succeeded(), false, &echo), Action::Exec(echo));
    }

    #[tokio::test]
    async fn refusal_keeps_probe_status() {
        assert_eq!(apply(Action::Refuse(EXIT_TIMEOUT)).await, EXIT_TIMEOUT);
        assert_eq!(apply(Action::Exit(0)).await, 0);
    }

    #[tokio::test]
    async fn missing_program_exits_not_found() {
        let status = apply(Action::Exec(cmd(&["waitfor-test-no-such-program"]))).await;
        assert_eq!(status, EXIT_NOT_FOUND);
    }
}
