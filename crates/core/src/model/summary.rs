use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::model::{
    DifficultyLevel, FIRST_TRY_POINTS, Grade, MAX_SCORE, Problem, QUESTIONS_PER_SESSION,
    SECOND_TRY_POINTS,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("expected {expected} resolved questions, got {len}")]
    WrongQuestionCount { expected: u8, len: usize },
}

/// How one question of a session was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionResult {
    pub index: u8,
    pub problem: Problem,
    pub attempts_used: u8,
    pub points: u32,
}

impl QuestionResult {
    #[must_use]
    pub fn is_first_try(&self) -> bool {
        self.points == FIRST_TRY_POINTS
    }

    #[must_use]
    pub fn is_second_try(&self) -> bool {
        self.points == SECOND_TRY_POINTS
    }

    #[must_use]
    pub fn is_missed(&self) -> bool {
        self.points == 0
    }
}

/// Aggregate summary for a completed quiz session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    level: DifficultyLevel,
    score: u32,
    max_score: u32,
    grade: Grade,
    first_try: u32,
    second_try: u32,
    missed: u32,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    elapsed_secs: i64,
}

impl SessionSummary {
    /// Build a summary from the resolved questions of a session.
    ///
    /// # Errors
    ///
    /// Returns `SessionSummaryError::InvalidTimeRange` if `completed_at` is before `started_at`.
    /// Returns `SessionSummaryError::WrongQuestionCount` if `results` is not a full session.
    pub fn from_results(
        level: DifficultyLevel,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        results: &[QuestionResult],
    ) -> Result<Self, SessionSummaryError> {
        if completed_at < started_at {
            return Err(SessionSummaryError::InvalidTimeRange);
        }
        if results.len() != usize::from(QUESTIONS_PER_SESSION) {
            return Err(SessionSummaryError::WrongQuestionCount {
                expected: QUESTIONS_PER_SESSION,
                len: results.len(),
            });
        }

        let mut score = 0_u32;
        let mut first_try = 0_u32;
        let mut second_try = 0_u32;
        let mut missed = 0_u32;

        for result in results {
            score = score.saturating_add(result.points);
            if result.is_first_try() {
                first_try += 1;
            } else if result.is_second_try() {
                second_try += 1;
            } else {
                missed += 1;
            }
        }

        let score = score.min(MAX_SCORE);

        Ok(Self {
            level,
            score,
            max_score: MAX_SCORE,
            grade: Grade::from_score(score),
            first_try,
            second_try,
            missed,
            started_at,
            completed_at,
            elapsed_secs: (completed_at - started_at).num_seconds(),
        })
    }

    #[must_use]
    pub fn level(&self) -> DifficultyLevel {
        self.level
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    #[must_use]
    pub fn grade(&self) -> Grade {
        self.grade
    }

    #[must_use]
    pub fn first_try(&self) -> u32 {
        self.first_try
    }

    #[must_use]
    pub fn second_try(&self) -> u32 {
        self.second_try
    }

    #[must_use]
    pub fn missed(&self) -> u32 {
        self.missed
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Whole seconds from the first question to the last answer.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        Duration::seconds(self.elapsed_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Operator;
    use crate::time::fixed_now;

    fn result(index: u8, points: u32) -> QuestionResult {
        QuestionResult {
            index,
            problem: Problem::new(2, 2, Operator::Add),
            attempts_used: if points == FIRST_TRY_POINTS { 1 } else { 2 },
            points,
        }
    }

    #[test]
    fn summary_counts_resolutions() {
        let now = fixed_now();
        let mut results: Vec<_> = (1..=8).map(|i| result(i, 10)).collect();
        results.push(result(9, 5));
        results.push(result(10, 0));

        let summary =
            SessionSummary::from_results(DifficultyLevel::Easy, now, now, &results).unwrap();

        assert_eq!(summary.score(), 85);
        assert_eq!(summary.max_score(), 100);
        assert_eq!(summary.grade(), Grade::A);
        assert_eq!(summary.first_try(), 8);
        assert_eq!(summary.second_try(), 1);
        assert_eq!(summary.missed(), 1);
    }

    #[test]
    fn summary_measures_time_taken() {
        let started = fixed_now();
        let completed = started + Duration::seconds(95);
        let results: Vec<_> = (1..=10).map(|i| result(i, 10)).collect();

        let summary =
            SessionSummary::from_results(DifficultyLevel::Moderate, started, completed, &results)
                .unwrap();

        assert_eq!(summary.elapsed(), Duration::seconds(95));
        assert_eq!(summary.started_at(), started);
        assert_eq!(summary.completed_at(), completed);
        assert_eq!(summary.grade(), Grade::APlus);
    }

    #[test]
    fn rejects_partial_sessions_and_bad_times() {
        let now = fixed_now();
        let results: Vec<_> = (1..=3).map(|i| result(i, 10)).collect();
        assert_eq!(
            SessionSummary::from_results(DifficultyLevel::Easy, now, now, &results),
            Err(SessionSummaryError::WrongQuestionCount {
                expected: 10,
                len: 3
            })
        );

        let earlier = now - Duration::seconds(1);
        assert_eq!(
            SessionSummary::from_results(DifficultyLevel::Easy, now, earlier, &results),
            Err(SessionSummaryError::InvalidTimeRange)
        );
    }
}
