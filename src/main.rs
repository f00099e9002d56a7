mod account;
mod commands;
mod error;
mod fixedpoint;
mod input;
mod teller;

use std::io::{self, IsTerminal};

use clap::Parser;
use tracing::{error, info, Level};

use crate::error::ConsoleError;
use crate::input::Console;
use crate::teller::Teller;

/// Keeps a single bank account for the length of an interactive session.
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// Log more diagnostics to stderr (-v info, -vv debug, -vvv trace)
    #[clap(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn init_logging(verbosity: usize) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let session = Teller::open(console).and_then(|mut teller| teller.run());

    // Every way out of a session is a normal exit
    match session {
        Ok(()) => info!("session finished"),
        Err(ConsoleError::Closed) => info!("input closed, session finished"),
        Err(err) => error!(%err, "session aborted"),
    }
}
