use std::io::IsTerminal;

use anyhow::anyhow;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;
use crate::config::WaitConfig;
use crate::error::WaitError;

/// Install the global subscriber. Status messages go to stderr; quiet mode
/// filters everything out.
pub fn init_tracing(config: &WaitConfig) -> Result<(), WaitError> {
    let filter = if config.quiet {
        EnvFilter::new("off")
    } else {
        let log_level = config.get_tracing_level()?;
        let directive: Directive = format!("waitfor={}", log_level.as_str().to_lowercase())
            .parse()
            .map_err(|e| WaitError::Config(anyhow!("invalid log directive: {e}")))?;
        EnvFilter::from_default_env().add_directive(directive)
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal());
    let result = match config.log_format {
        LogFormat::Text => builder.with_target(false).without_time().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|e| WaitError::Config(anyhow!("failed to install logger: {e}")))
}
