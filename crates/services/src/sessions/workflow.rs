use tracing::debug;

use quiz_core::Clock;
use quiz_core::model::DifficultyLevel;

use super::service::QuizSession;
use crate::generator::ProblemGenerator;

/// Starts quiz sessions with a shared clock and randomness policy.
///
/// With a seed, the n-th session started draws from `seed + n`, so a replayed
/// run produces the same problems while "play again" still gets fresh ones.
#[derive(Debug, Clone, Default)]
pub struct QuizLoopService {
    clock: Clock,
    seed: Option<u64>,
    sessions_started: u64,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            seed: None,
            sessions_started: 0,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn sessions_started(&self) -> u64 {
        self.sessions_started
    }

    /// Start a new session at `level`. The caller drops any previous session.
    pub fn start_session(&mut self, level: DifficultyLevel) -> QuizSession {
        let generator = match self.seed {
            Some(seed) => {
                let session_seed = seed.wrapping_add(self.sessions_started);
                debug!(session_seed, "using seeded problem generator");
                ProblemGenerator::seeded(session_seed)
            }
            None => ProblemGenerator::thread(),
        };
        self.sessions_started += 1;
        QuizSession::start_with_clock(level, generator, self.clock)
    }
}
