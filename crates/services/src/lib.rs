#![forbid(unsafe_code)]

pub mod error;
pub mod generator;
pub mod sessions;

pub use quiz_core::Clock;

pub use error::SessionError;
pub use generator::{ProblemGenerator, RandomSource, RngSource, ScriptedSource};
pub use sessions::{AnswerResult, QuizLoopService, QuizSession};
