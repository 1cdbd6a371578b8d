use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

use quiz_core::Clock;
use quiz_core::model::{
    AnswerOutcome, AttemptState, DifficultyLevel, Grade, QUESTIONS_PER_SESSION, QuestionResult,
    SessionState, SessionSummary,
};

use crate::error::SessionError;
use crate::generator::ProblemGenerator;

/// Outcome of a submitted answer together with the state it left behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerResult {
    pub outcome: AnswerOutcome,
    pub state: SessionState,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz of `QUESTIONS_PER_SESSION` problems at a fixed level.
///
/// Each problem allows two attempts: a first-try answer scores 10, a
/// second-try answer 5, and two misses score nothing and reveal the answer.
pub struct QuizSession {
    level: DifficultyLevel,
    generator: ProblemGenerator,
    state: SessionState,
    results: Vec<QuestionResult>,
    clock: Clock,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Start a session and draw question 1.
    #[must_use]
    pub fn start(level: DifficultyLevel, generator: ProblemGenerator) -> Self {
        Self::start_with_clock(level, generator, Clock::system())
    }

    #[must_use]
    pub fn start_with_clock(
        level: DifficultyLevel,
        mut generator: ProblemGenerator,
        clock: Clock,
    ) -> Self {
        let first = generator.create_problem(level);
        info!(%level, "quiz session started");
        Self {
            level,
            generator,
            state: SessionState::start(first),
            results: Vec::with_capacity(usize::from(QUESTIONS_PER_SESSION)),
            clock,
            started_at: clock.now(),
            completed_at: None,
        }
    }

    #[must_use]
    pub fn level(&self) -> DifficultyLevel {
        self.level
    }

    /// Read-only snapshot for rendering.
    #[must_use]
    pub fn current_state(&self) -> SessionState {
        self.state.clone()
    }

    /// Questions resolved so far, in order.
    #[must_use]
    pub fn results(&self) -> &[QuestionResult] {
        &self.results
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Check `candidate` against the live problem and advance the session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished;
    /// the state is not touched in that case.
    pub fn submit_answer(&mut self, candidate: i64) -> Result<AnswerResult, SessionError> {
        if self.state.is_complete() {
            warn!(candidate, "answer submitted to a completed session");
            return Err(SessionError::Completed);
        }

        let problem = *self.state.current_problem();
        let index = self.state.question_index();
        let attempt = self.state.attempt();

        let outcome = if problem.is_correct(candidate) {
            AnswerOutcome::Correct {
                points_awarded: attempt.points_if_correct(),
            }
        } else {
            match attempt {
                AttemptState::FirstAttempt => {
                    let moved = self.state.begin_second_attempt();
                    debug_assert!(moved, "live problem was already on its second attempt");
                    AnswerOutcome::IncorrectRetry
                }
                AttemptState::SecondAttempt => AnswerOutcome::IncorrectFinal {
                    revealed_answer: problem.correct_answer(),
                },
            }
        };

        debug!(
            question = index,
            attempt = attempt.number(),
            candidate,
            ?outcome,
            "answer evaluated"
        );

        if outcome.resolves_question() {
            self.results.push(QuestionResult {
                index,
                problem,
                attempts_used: attempt.number(),
                points: outcome.points_awarded(),
            });

            let level = self.level;
            let generator = &mut self.generator;
            self.state
                .resolve(outcome.points_awarded(), || generator.create_problem(level));

            if self.state.is_complete() {
                self.completed_at = Some(self.clock.now());
                info!(
                    score = self.state.score(),
                    grade = %Grade::from_score(self.state.score()),
                    "quiz session completed"
                );
            }
        }

        Ok(AnswerResult {
            outcome,
            state: self.state.clone(),
        })
    }

    /// Letter grade for the final score.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` while questions remain.
    pub fn final_grade(&self) -> Result<Grade, SessionError> {
        self.ensure_complete()?;
        Ok(Grade::from_score(self.state.score()))
    }

    /// Results-screen summary of a finished session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` while questions remain.
    /// Returns `SessionError::Summary` if the recorded results are inconsistent.
    pub fn summary(&self) -> Result<SessionSummary, SessionError> {
        self.ensure_complete()?;
        let completed_at = self.completed_at.ok_or(SessionError::NotComplete {
            question_index: self.state.question_index(),
            total: QUESTIONS_PER_SESSION,
        })?;
        Ok(SessionSummary::from_results(
            self.level,
            self.started_at,
            completed_at,
            &self.results,
        )?)
    }

    fn ensure_complete(&self) -> Result<(), SessionError> {
        if self.state.is_complete() {
            return Ok(());
        }
        warn!(
            question = self.state.question_index(),
            "final result requested before session completed"
        );
        Err(SessionError::NotComplete {
            question_index: self.state.question_index(),
            total: QUESTIONS_PER_SESSION,
        })
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("level", &self.level)
            .field("state", &self.state)
            .field("results_len", &self.results.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
