use clap::{Parser, ValueEnum};

use quiz_core::model::DifficultyLevel;

/// Format of the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Score and rank, as plain text
    Text,
    /// Session summary as JSON
    Json,
}

/// Command-line arguments for the arithmetic quiz.
#[derive(Parser, Debug)]
#[command(name = "arith-quiz")]
#[command(version, about = "Arithmetic skill tester: ten questions, two tries each")]
#[command(long_about = r#"
Arithmetic skill tester.

Each session asks ten addition or subtraction problems. A correct answer on the
first try scores 10 points, on the second try 5 points. After two wrong answers
the correct one is shown and the quiz moves on.

Example:
  arith-quiz --level moderate
  arith-quiz --level 3 --seed 42 --output json
"#)]
pub struct Args {
    /// Difficulty: easy (0-9), moderate (10-99), advanced (1000-9999), or 1/2/3.
    /// Prompted for when omitted.
    #[arg(short, long, env = "QUIZ_LEVEL", value_name = "LEVEL")]
    pub level: Option<DifficultyLevel>,

    /// Seed for reproducible problems
    #[arg(long, env = "QUIZ_SEED", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output format for the results screen
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
