mod service;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use service::{AnswerResult, QuizSession};
pub use workflow::QuizLoopService;
