use aikiosk::quiz::{answered_count, question_bank, score, QUESTION_COUNT};

#[test]
fn bank_has_the_expected_shape() {
    let questions = question_bank();
    assert_eq!(questions.len(), QUESTION_COUNT);
    for question in questions {
        assert!(question.correct < question.options.len());
        assert!(!question.prompt.is_empty());
    }
}

#[test]
fn empty_answers_score_zero() {
    assert_eq!(score(question_bank(), &[]), 0);
}

#[test]
fn all_unanswered_scores_zero() {
    assert_eq!(score(question_bank(), &[None; QUESTION_COUNT]), 0);
}

#[test]
fn all_correct_scores_question_count() {
    let answers: Vec<Option<usize>> = question_bank().iter().map(|q| Some(q.correct)).collect();
    assert_eq!(score(question_bank(), &answers), QUESTION_COUNT as u32);
}

#[test]
fn exactly_seven_matches_score_seven() {
    let mut answers: Vec<Option<usize>> =
        question_bank().iter().map(|q| Some(q.correct)).collect();
    for slot in answers.iter_mut().take(3) {
        *slot = slot.map(|correct| (correct + 1) % 4);
    }
    assert_eq!(score(question_bank(), &answers), 7);
}

#[test]
fn unanswered_never_counts_even_for_option_zero() {
    // Questions whose correct option is 0 must not score on a None slot.
    let questions = question_bank();
    let answers = [None; QUESTION_COUNT];
    assert!(questions.iter().any(|q| q.correct == 0));
    assert_eq!(score(questions, &answers), 0);
}

#[test]
fn scoring_is_invariant_under_reevaluation() {
    let answers = [
        Some(1),
        Some(0),
        None,
        Some(2),
        None,
        Some(1),
        None,
        None,
        Some(3),
        None,
    ];
    let first = score(question_bank(), &answers);
    for _ in 0..5 {
        assert_eq!(score(question_bank(), &answers), first);
    }
}

#[test]
fn answered_count_tracks_filled_slots() {
    let mut answers = [None; QUESTION_COUNT];
    assert_eq!(answered_count(&answers), 0);
    answers[0] = Some(0);
    answers[9] = Some(3);
    assert_eq!(answered_count(&answers), 2);
    answers[0] = Some(1);
    assert_eq!(answered_count(&answers), 2);
}
