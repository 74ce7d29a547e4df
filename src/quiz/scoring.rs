//! Quiz scoring.

use crate::quiz::questions::Question;

/// Count the questions answered with exactly the correct option index.
///
/// Unanswered slots (`None`) never count. Pure: same inputs, same score.
/// Computed once at submission time and fed into the `CompleteQuiz`
/// transition, never updated incrementally.
pub fn score(questions: &[Question], answers: &[Option<usize>]) -> u32 {
    questions
        .iter()
        .zip(answers)
        .filter(|(question, answer)| **answer == Some(question.correct))
        .count() as u32
}

/// Number of answered slots. Submission from the quiz screen is enabled only
/// once every question has an answer; the timeout path submits regardless.
pub fn answered_count(answers: &[Option<usize>]) -> usize {
    answers.iter().filter(|slot| slot.is_some()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::questions::{question_bank, QUESTION_COUNT};

    #[test]
    fn empty_answers_score_zero() {
        assert_eq!(score(question_bank(), &[]), 0);
        assert_eq!(score(question_bank(), &[None; QUESTION_COUNT]), 0);
    }

    #[test]
    fn all_correct_scores_full() {
        let answers: Vec<Option<usize>> =
            question_bank().iter().map(|q| Some(q.correct)).collect();
        assert_eq!(score(question_bank(), &answers), QUESTION_COUNT as u32);
    }

    #[test]
    fn wrong_option_does_not_count() {
        let mut answers: Vec<Option<usize>> =
            question_bank().iter().map(|q| Some(q.correct)).collect();
        answers[0] = Some((question_bank()[0].correct + 1) % 4);
        assert_eq!(score(question_bank(), &answers), QUESTION_COUNT as u32 - 1);
    }

    #[test]
    fn scoring_is_repeatable() {
        let answers = [Some(1), None, Some(2), None, None, None, None, None, None, None];
        let first = score(question_bank(), &answers);
        assert_eq!(score(question_bank(), &answers), first);
    }

    #[test]
    fn answered_count_ignores_none() {
        let answers = [Some(0), None, Some(3), None, None, None, None, None, None, None];
        assert_eq!(answered_count(&answers), 2);
    }
}
