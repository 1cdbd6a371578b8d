mod grade;
mod level;
mod problem;
mod session;
mod summary;

pub use grade::Grade;
pub use level::{DifficultyLevel, LevelError};
pub use problem::{Operator, Problem};
pub use session::{
    AnswerOutcome, AttemptState, FIRST_TRY_POINTS, MAX_SCORE, QUESTIONS_PER_SESSION, QuizPhase,
    SECOND_TRY_POINTS, SessionState,
};
pub use summary::{QuestionResult, SessionSummary, SessionSummaryError};
