//! sortviz: animated sorting algorithms in the terminal.
//!
//! Run: cargo run -p sortviz-terminal --bin sortviz -- --len 60

use std::process::ExitCode;

use clap::Parser;
use sortviz_core::{Selection, SortvizConfig};
use sortviz_terminal::cli::Cli;
use sortviz_terminal::logging::init_file_logging;
use sortviz_terminal::{App, CrosstermBackend, Session, TuiError};
use tracing::{error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "sortviz failed");
            eprintln!("sortviz: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), TuiError> {
    if cli.dump_config {
        print!("{}", SortvizConfig::default_yaml()?);
        return Ok(());
    }

    if let Some(path) = &cli.log_file {
        init_file_logging(path)?;
    }

    let mut config = SortvizConfig::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    let selection = cli.selection()?;

    // Everything that can fail on bad input is checked before the terminal
    // is touched, so errors print on a normal screen.
    let mut app = App::new(&config, cli.color_mode())?;

    let mut backend = CrosstermBackend::new();
    let mut session = Session::enter(&mut backend)?;
    let result = match selection {
        Some(Selection::Run(spec)) => app.run(session.backend(), spec).map(drop),
        Some(Selection::Quit) => Ok(()),
        None => app.run_menu(session.backend()),
    };
    let restored = session.finish();
    result?;
    restored?;

    if let Some((spec, stats)) = app.last_run() {
        info!(%spec, steps = stats.steps, swaps = stats.swaps, "last run");
    }
    Ok(())
}
