//! Terminal front end for the arithmetic quiz.
//!
//! Wires the session services to stdin/stdout. Everything here is glue:
//! argument parsing, logging setup and the play-again loop.

mod args;
mod console;

use std::io;

use anyhow::Result;
use clap::Parser;
use quiz_core::Clock;
use services::QuizLoopService;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::args::Args;
use crate::console::Console;

fn init_tracing(verbose: u8) {
    // Logs go to stderr so they never interleave with the quiz itself.
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let mut sessions = QuizLoopService::new(Clock::system()).with_seed(args.seed);

    loop {
        let level = match args.level {
            Some(level) => level,
            None => match console.choose_level()? {
                Some(level) => level,
                None => return Ok(()),
            },
        };

        let mut session = sessions.start_session(level);
        if !console.play(&mut session)? {
            info!("input closed before the quiz finished");
            return Ok(());
        }

        let summary = session.summary()?;
        console.show_results(&summary, args.output)?;

        if !console.play_again()? {
            return Ok(());
        }
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(err) = run(args) {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err:#}");
        std::process::exit(2);
    }
}
