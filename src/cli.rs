use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Wait until a TCP host:port accepts connections, then optionally run a command.
#[derive(Parser, Debug)]
#[command(
    name = "waitfor",
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    override_usage = "waitfor host:port [-s] [-t timeout] [-- command args]\n       waitfor -h host -p port [-s] [-q] [-t timeout] [-- command args]"
)]
pub struct Cli {
    /// Target to wait for, as host:port
    #[arg(value_name = "HOST:PORT")]
    pub target: Option<String>,

    /// Host or IP under test
    #[arg(short = 'h', long)]
    pub host: Option<String>,

    /// TCP port under test
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,

    /// Timeout in seconds, zero for no timeout [default: 15]
    #[arg(short, long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Only execute the command if the test succeeds
    #[arg(short, long)]
    pub strict: bool,

    /// Don't output any status messages
    #[arg(short, long)]
    pub quiet: bool,

    /// JSON file providing defaults for timeout, strict, quiet and logging
    #[arg(long, env = "WAITFOR_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level for status messages (trace, debug, info, warn, error)
    #[arg(long, env = "WAITFOR_LOG_LEVEL", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Format of status messages
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,

    /// Print usage and exit
    #[arg(long)]
    pub help: bool,

    /// Command to execute after the test finishes
    #[arg(last = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}
