mod cli;
mod config;
mod error;
mod executor;
mod prober;
mod signals;
mod supervisor;
mod telemetry;
mod util;
mod waiter;

use clap::{CommandFactory, Parser};
use cli::Cli;
use config::WaitConfig;
use error::{WaitError, EXIT_USAGE};
use supervisor::Supervisor;
use waiter::PortWaiter;

use tracing::info;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() {
    std::process::exit(run().await);
}

async fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { EXIT_USAGE } else { 0 };
        }
    };
    if cli.help {
        print_usage();
        return EXIT_USAGE;
    }

    // listen for interrupts before anything can block
    let cancel = signals::spawn_cancellation();

    let config = match WaitConfig::from_cli(cli).await {
        Ok(config) => config,
        Err(e) => return usage_error(&e),
    };
    if let Err(e) = telemetry::init_tracing(&config) {
        return usage_error(&e);
    }

    let target = config.target();
    match config.timeout {
        Some(timeout) => info!("waiting {} seconds for {}", timeout.as_secs(), target),
        None => info!("waiting for {} without a timeout", target),
    }

    let waiter = PortWaiter::new(&config.host, config.port);
    let verdict = Supervisor::new(config.timeout, cancel)
        .run(&target, waiter.wait())
        .await;

    let action = executor::decide(&verdict, config.strict, &config.command);
    executor::apply(action).await
}

fn usage_error(err: &WaitError) -> i32 {
    eprintln!("{err}");
    print_usage();
    err.exit_code()
}

fn print_usage() {
    eprintln!("{}", Cli::command().render_long_help());
}
