use serde::Serialize;

use crate::model::Problem;

/// Number of questions asked in every session.
pub const QUESTIONS_PER_SESSION: u8 = 10;
/// Points for a correct answer on the first attempt.
pub const FIRST_TRY_POINTS: u32 = 10;
/// Points for a correct answer on the second attempt.
pub const SECOND_TRY_POINTS: u32 = 5;
/// Best possible session score.
pub const MAX_SCORE: u32 = FIRST_TRY_POINTS * QUESTIONS_PER_SESSION as u32;

//
// ─── ATTEMPTS ─────────────────────────────────────────────────────────────────
//

/// How many times the live problem has been answered incorrectly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AttemptState {
    #[default]
    FirstAttempt,
    SecondAttempt,
}

impl AttemptState {
    /// 1-based attempt number, for display.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::FirstAttempt => 1,
            Self::SecondAttempt => 2,
        }
    }

    /// Points a correct answer earns on this attempt.
    #[must_use]
    pub fn points_if_correct(self) -> u32 {
        match self {
            Self::FirstAttempt => FIRST_TRY_POINTS,
            Self::SecondAttempt => SECOND_TRY_POINTS,
        }
    }
}

/// Where a session stands in its question loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuizPhase {
    AwaitingFirstAttempt,
    AwaitingSecondAttempt,
    Completed,
}

//
// ─── OUTCOME ──────────────────────────────────────────────────────────────────
//

/// What happened to a single submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerOutcome {
    /// Right answer; the question is resolved.
    Correct { points_awarded: u32 },
    /// Wrong first answer; the same problem stays live.
    IncorrectRetry,
    /// Wrong second answer; the question is resolved with no points.
    IncorrectFinal { revealed_answer: i64 },
}

impl AnswerOutcome {
    #[must_use]
    pub fn points_awarded(&self) -> u32 {
        match self {
            Self::Correct { points_awarded } => *points_awarded,
            Self::IncorrectRetry | Self::IncorrectFinal { .. } => 0,
        }
    }

    /// True when the outcome ends the current question.
    #[must_use]
    pub fn resolves_question(&self) -> bool {
        !matches!(self, Self::IncorrectRetry)
    }
}

//
// ─── SESSION STATE ────────────────────────────────────────────────────────────
//

/// Snapshot of a quiz session.
///
/// Invariants maintained by the transition methods:
/// - `question_index` stays in `1..=QUESTIONS_PER_SESSION` and is frozen on completion.
/// - `score` never decreases and never exceeds `MAX_SCORE`.
/// - `attempt` moves to `SecondAttempt` at most once per problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    question_index: u8,
    score: u32,
    current_problem: Problem,
    attempt: AttemptState,
    is_complete: bool,
}

impl SessionState {
    /// Fresh state with `first` as question 1.
    #[must_use]
    pub fn start(first: Problem) -> Self {
        Self {
            question_index: 1,
            score: 0,
            current_problem: first,
            attempt: AttemptState::FirstAttempt,
            is_complete: false,
        }
    }

    #[must_use]
    pub fn question_index(&self) -> u8 {
        self.question_index
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The live problem, or the last one asked once the session is complete.
    #[must_use]
    pub fn current_problem(&self) -> &Problem {
        &self.current_problem
    }

    #[must_use]
    pub fn attempt(&self) -> AttemptState {
        self.attempt
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.question_index >= QUESTIONS_PER_SESSION
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        match (self.is_complete, self.attempt) {
            (true, _) => QuizPhase::Completed,
            (false, AttemptState::FirstAttempt) => QuizPhase::AwaitingFirstAttempt,
            (false, AttemptState::SecondAttempt) => QuizPhase::AwaitingSecondAttempt,
        }
    }

    /// Moves the live problem to its second attempt.
    ///
    /// Returns `false` and leaves the state untouched when the problem is already
    /// on its second attempt or the session is complete.
    pub fn begin_second_attempt(&mut self) -> bool {
        if self.phase() != QuizPhase::AwaitingFirstAttempt {
            return false;
        }
        self.attempt = AttemptState::SecondAttempt;
        true
    }

    /// Resolves the live problem, adding `points`, then either completes the
    /// session or installs the problem produced by `next` as the new question.
    ///
    /// `next` is only called when another question follows. Returns `false`
    /// without changes if the session is already complete.
    pub fn resolve(&mut self, points: u32, next: impl FnOnce() -> Problem) -> bool {
        if self.is_complete {
            return false;
        }
        self.score = self.score.saturating_add(points).min(MAX_SCORE);
        if self.is_last_question() {
            self.is_complete = true;
        } else {
            self.question_index += 1;
            self.current_problem = next();
            self.attempt = AttemptState::FirstAttempt;
        }
        true
    }
}
