use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use std::fmt;
use std::ops::RangeInclusive;

use quiz_core::model::{DifficultyLevel, Operator, Problem};

//
// ─── RANDOMNESS ────────────────────────────────────────────────────────────────
//

/// Source of randomness for problem generation.
///
/// Swapped for a [`ScriptedSource`] in tests to get fixed problems.
pub trait RandomSource {
    /// Uniform integer within `range`, both bounds inclusive.
    fn int_in(&mut self, range: RangeInclusive<i64>) -> i64;

    /// Fair coin flip.
    fn coin_flip(&mut self) -> bool;
}

/// [`RandomSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Thread-local generator seeded by the OS.
    #[must_use]
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible generator; the same seed yields the same problems.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn int_in(&mut self, range: RangeInclusive<i64>) -> i64 {
        self.rng.random_range(range)
    }

    fn coin_flip(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}

/// Replays fixed operand and operator sequences, cycling when exhausted.
///
/// Operands are returned as scripted, regardless of the requested range.
/// An empty operand script yields the range's lower bound; an empty operator
/// script always yields `Operator::Add`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    operands: Vec<i64>,
    operators: Vec<Operator>,
    next_operand: usize,
    next_operator: usize,
}

impl ScriptedSource {
    #[must_use]
    pub fn new(operands: Vec<i64>, operators: Vec<Operator>) -> Self {
        Self {
            operands,
            operators,
            next_operand: 0,
            next_operator: 0,
        }
    }
}

impl RandomSource for ScriptedSource {
    fn int_in(&mut self, range: RangeInclusive<i64>) -> i64 {
        if self.operands.is_empty() {
            return *range.start();
        }
        let value = self.operands[self.next_operand % self.operands.len()];
        self.next_operand += 1;
        value
    }

    fn coin_flip(&mut self) -> bool {
        if self.operators.is_empty() {
            return true;
        }
        let op = self.operators[self.next_operator % self.operators.len()];
        self.next_operator += 1;
        op == Operator::Add
    }
}

//
// ─── GENERATOR ─────────────────────────────────────────────────────────────────
//

/// Produces arithmetic problems sized by difficulty level.
pub struct ProblemGenerator {
    source: Box<dyn RandomSource>,
}

impl ProblemGenerator {
    #[must_use]
    pub fn new(source: impl RandomSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Generator using the thread-local OS-seeded RNG.
    #[must_use]
    pub fn thread() -> Self {
        Self::new(RngSource::thread())
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(RngSource::seeded(seed))
    }

    /// Uniform operand within the level's inclusive range.
    pub fn sample_operand(&mut self, level: DifficultyLevel) -> i64 {
        self.source.int_in(level.operand_range())
    }

    /// `Add` or `Subtract` with equal probability.
    pub fn sample_operator(&mut self) -> Operator {
        if self.source.coin_flip() {
            Operator::Add
        } else {
            Operator::Subtract
        }
    }

    /// Draws both operands, then the operator, and builds the problem.
    pub fn create_problem(&mut self, level: DifficultyLevel) -> Problem {
        let a = self.sample_operand(level);
        let b = self.sample_operand(level);
        let operator = self.sample_operator();
        Problem::new(a, b, operator)
    }
}

impl fmt::Debug for ProblemGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProblemGenerator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_source_yields_exact_problem() {
        let mut generator =
            ProblemGenerator::new(ScriptedSource::new(vec![3, 4], vec![Operator::Add]));
        let problem = generator.create_problem(DifficultyLevel::Easy);
        assert_eq!(problem, Problem::new(3, 4, Operator::Add));
        assert_eq!(problem.correct_answer(), 7);
    }

    #[test]
    fn subtraction_can_go_negative() {
        let mut generator =
            ProblemGenerator::new(ScriptedSource::new(vec![2, 9], vec![Operator::Subtract]));
        let problem = generator.create_problem(DifficultyLevel::Easy);
        assert_eq!(problem.correct_answer(), -7);
    }

    #[test]
    fn scripted_source_cycles_and_handles_empty_scripts() {
        let mut source = ScriptedSource::new(vec![1, 2], vec![Operator::Subtract]);
        assert_eq!(source.int_in(0..=9), 1);
        assert_eq!(source.int_in(0..=9), 2);
        assert_eq!(source.int_in(0..=9), 1);
        assert!(!source.coin_flip());
        assert!(!source.coin_flip());

        let mut empty = ScriptedSource::default();
        assert_eq!(empty.int_in(10..=99), 10);
        assert!(empty.coin_flip());
    }

    #[test]
    fn seeded_generators_agree() {
        let mut a = ProblemGenerator::seeded(42);
        let mut b = ProblemGenerator::seeded(42);
        for _ in 0..20 {
            assert_eq!(
                a.create_problem(DifficultyLevel::Moderate),
                b.create_problem(DifficultyLevel::Moderate)
            );
        }
    }

    #[test]
    fn operands_stay_within_level_bounds() {
        let mut generator = ProblemGenerator::seeded(7);
        for level in DifficultyLevel::ALL {
            let range = level.operand_range();
            for _ in 0..10_000 {
                let value = generator.sample_operand(level);
                assert!(range.contains(&value), "{value} outside {range:?} for {level}");
            }
        }
    }

    #[test]
    fn both_operators_show_up() {
        let mut generator = ProblemGenerator::seeded(11);
        let adds = (0..10_000)
            .filter(|_| generator.sample_operator() == Operator::Add)
            .count();
        assert!((4_000..=6_000).contains(&adds), "adds = {adds}");
    }
}
