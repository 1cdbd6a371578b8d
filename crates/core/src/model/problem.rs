use serde::Serialize;
use std::fmt;

/// Arithmetic operator of a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
        }
    }

    #[must_use]
    pub fn apply(self, a: i64, b: i64) -> i64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
        }
    }
}

/// One arithmetic question with its answer computed at creation.
///
/// Subtraction may produce a negative answer; it is checked as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Problem {
    operand_a: i64,
    operand_b: i64,
    operator: Operator,
    correct_answer: i64,
}

impl Problem {
    #[must_use]
    pub fn new(operand_a: i64, operand_b: i64, operator: Operator) -> Self {
        Self {
            operand_a,
            operand_b,
            operator,
            correct_answer: operator.apply(operand_a, operand_b),
        }
    }

    #[must_use]
    pub fn operand_a(&self) -> i64 {
        self.operand_a
    }

    #[must_use]
    pub fn operand_b(&self) -> i64 {
        self.operand_b
    }

    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    #[must_use]
    pub fn correct_answer(&self) -> i64 {
        self.correct_answer
    }

    #[must_use]
    pub fn is_correct(&self, candidate: i64) -> bool {
        candidate == self.correct_answer
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.operand_a,
            self.operator.symbol(),
            self.operand_b
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_is_fixed_at_creation() {
        let add = Problem::new(3, 4, Operator::Add);
        assert_eq!(add.correct_answer(), 7);
        assert!(add.is_correct(7));
        assert!(!add.is_correct(-1));

        let sub = Problem::new(3, 4, Operator::Subtract);
        assert_eq!(sub.correct_answer(), -1);
        assert!(sub.is_correct(-1));
        assert!(!sub.is_correct(1));
    }

    #[test]
    fn displays_as_expression() {
        assert_eq!(Problem::new(12, 7, Operator::Subtract).to_string(), "12 - 7");
        assert_eq!(Problem::new(1000, 9999, Operator::Add).to_string(), "1000 + 9999");
    }
}
