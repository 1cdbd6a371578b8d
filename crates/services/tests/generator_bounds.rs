use quiz_core::model::{DifficultyLevel, Operator};
use services::{ProblemGenerator, ScriptedSource};

#[test]
fn generated_answers_follow_the_operator() {
    let mut generator = ProblemGenerator::seeded(99);
    let mut saw_negative = false;
    for level in DifficultyLevel::ALL {
        for _ in 0..2_000 {
            let p = generator.create_problem(level);
            let expected = match p.operator() {
                Operator::Add => p.operand_a() + p.operand_b(),
                Operator::Subtract => p.operand_a() - p.operand_b(),
            };
            assert_eq!(p.correct_answer(), expected);
            assert!(level.operand_range().contains(&p.operand_a()));
            assert!(level.operand_range().contains(&p.operand_b()));
            saw_negative |= p.correct_answer() < 0;
        }
    }
    assert!(saw_negative);
}

#[test]
fn operand_extremes_are_reachable() {
    let mut generator = ProblemGenerator::seeded(3);
    let samples: Vec<i64> = (0..10_000)
        .map(|_| generator.sample_operand(DifficultyLevel::Easy))
        .collect();
    assert_eq!(samples.iter().min(), Some(&0));
    assert_eq!(samples.iter().max(), Some(&9));
}

#[test]
fn scripted_operands_three_and_four_add_to_seven() {
    let mut generator = ProblemGenerator::new(ScriptedSource::new(vec![3, 4], vec![Operator::Add]));
    let problem = generator.create_problem(DifficultyLevel::Moderate);
    assert_eq!(
        (problem.operand_a(), problem.operand_b(), problem.operator(), problem.correct_answer()),
        (3, 4, Operator::Add, 7)
    );
}
