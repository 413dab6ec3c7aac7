mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod labels;
mod output;
mod store;
mod transfer;
mod utils;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::Config;
use consts::LOG_ENV;

/// Log to stderr; `ADSPEND_LOG` wins over `--debug`
fn init_logging(debug: bool, ansi: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .init();
}

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);
    init_logging(cli.debug, cli.use_log_color());

    if let Err(e) = app::run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
