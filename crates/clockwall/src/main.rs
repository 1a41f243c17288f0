use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

mod app;
mod canvas;
mod cli;
mod logging;
mod terminal;

use cli::Cli;

/// Exit status for any fatal configuration, surface or render error.
const FAILURE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = run(&cli);
    ExitCode::from(exit_status(result, &mut io::stderr()))
}

/// Report a fatal error on `stderr` and pick the process exit status.
fn exit_status(result: color_eyre::Result<()>, stderr: &mut impl Write) -> u8 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            let _ = writeln!(stderr, "{err:?}");
            FAILURE
        }
    }
}

fn run(cli: &Cli) -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = cli.resolve()?;
    logging::init(config.log_file.as_deref())?;
    info!(mode = %config.mode, frame_rate = config.frame_rate, "starting clockwall");
    app::run(&config)
}
