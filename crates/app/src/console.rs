//! Line-oriented terminal adapter around a quiz session.
//!
//! All scoring lives in `services`; this module only parses what the user typed
//! and renders the returned outcomes.

use std::io::{self, BufRead, Write};

use quiz_core::model::{AnswerOutcome, AttemptState, DifficultyLevel, SessionState, SessionSummary};
use services::QuizSession;
use tracing::debug;

use crate::args::OutputFormat;

/// Question prompt, e.g. `Q3:  12  -  7 = ?`.
#[must_use]
pub fn question_line(state: &SessionState) -> String {
    let problem = state.current_problem();
    let retry = match state.attempt() {
        AttemptState::FirstAttempt => "",
        AttemptState::SecondAttempt => "  (last try)",
    };
    format!(
        "Q{}:  {}  {}  {} = ?{retry}",
        state.question_index(),
        problem.operand_a(),
        problem.operator().symbol(),
        problem.operand_b()
    )
}

/// Feedback line shown after an answer.
#[must_use]
pub fn feedback(outcome: &AnswerOutcome) -> String {
    match outcome {
        AnswerOutcome::Correct { points_awarded } => format!("Correct! +{points_awarded} points"),
        AnswerOutcome::IncorrectRetry => "Incorrect! Try again.".to_string(),
        AnswerOutcome::IncorrectFinal { revealed_answer } => {
            format!("Wrong again! Correct was {revealed_answer}")
        }
    }
}

/// Results screen text.
#[must_use]
pub fn results_text(summary: &SessionSummary) -> String {
    format!(
        "Quiz Complete!\nFinal Score: {} / {}\nRank: {}\n\
         (first try: {}, second try: {}, missed: {}, time: {}s)",
        summary.score(),
        summary.max_score(),
        summary.grade(),
        summary.first_try(),
        summary.second_try(),
        summary.missed(),
        summary.elapsed().num_seconds()
    )
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Next trimmed input line, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Ask for a difficulty level until a valid one is given.
    ///
    /// Returns `None` if input ends first.
    pub fn choose_level(&mut self) -> io::Result<Option<DifficultyLevel>> {
        self.say("Arithmetic Skill Tester!")?;
        self.say("Select Difficulty Level:")?;
        for level in DifficultyLevel::ALL {
            let line = format!("  {}. {}", level.to_u8(), level.label());
            self.say(&line)?;
        }
        loop {
            self.prompt("> ")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<DifficultyLevel>() {
                Ok(level) => return Ok(Some(level)),
                Err(err) => {
                    debug!(%err, "level selection rejected");
                    self.say("You must choose a difficulty level.")?;
                }
            }
        }
    }

    /// Run questions until the session completes.
    ///
    /// Returns `false` if input ends before the last question is resolved.
    pub fn play(&mut self, session: &mut QuizSession) -> anyhow::Result<bool> {
        while !session.is_complete() {
            let line = question_line(&session.current_state());
            self.say(&line)?;
            self.prompt("Answer: ")?;
            let Some(raw) = self.read_line()? else {
                return Ok(false);
            };
            // Digits that overflow i64 are rejected like any other non-number.
            let Ok(candidate) = raw.parse::<i64>() else {
                self.say("Enter a number only")?;
                continue;
            };
            let result = session.submit_answer(candidate)?;
            self.say(&feedback(&result.outcome))?;
            let score = format!("Score: {}", result.state.score());
            self.say(&score)?;
        }
        Ok(true)
    }

    pub fn show_results(
        &mut self,
        summary: &SessionSummary,
        format: OutputFormat,
    ) -> anyhow::Result<()> {
        let rendered = match format {
            OutputFormat::Text => results_text(summary),
            OutputFormat::Json => serde_json::to_string_pretty(summary)?,
        };
        self.say(&rendered)?;
        Ok(())
    }

    /// `true` when the user answers yes. End of input counts as no.
    pub fn play_again(&mut self) -> io::Result<bool> {
        self.prompt("Play again? [y/N] ")?;
        Ok(self
            .read_line()?
            .is_some_and(|answer| matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes")))
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}
