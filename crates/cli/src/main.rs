mod cli;
mod console;
mod logging;
mod output;

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use jsdbg_ext::{BootstrapConfig, CancelToken, Dispatcher};
use tracing::error;

use crate::cli::Cli;
use crate::console::EchoConsole;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        error!(error = %err, "launch failed");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config =
        BootstrapConfig::default().with_fetch_timeout(Duration::from_secs(cli.timeout_secs));
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(scratch_dir) = cli.scratch_dir {
        config = config.with_scratch_dir(scratch_dir);
    }

    let mut dispatcher = Dispatcher::new(config).context("constructing HTTP client")?;
    let mut console = EchoConsole;
    let args = cli.unstable.then_some("-unstable");

    let outcome = dispatcher.launch(&mut console, args, &CancelToken::new())?;
    output::print_report(&outcome, &dispatcher.config().scratch_dir, cli.json)
}
