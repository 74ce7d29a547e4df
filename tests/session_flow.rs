//! End-to-end walk through one visitor session, driven through the store's
//! dispatch entry point the way the UI drives it.

use aikiosk::quiz::{question_bank, score, QUESTION_COUNT};
use aikiosk::session::{ChatMessage, SessionIntent, SessionStore};

#[test]
fn full_quiz_session_with_overwrite_submit_and_retry() {
    let mut store = SessionStore::new();

    store.dispatch(SessionIntent::SetUserName("Ali".to_string()));
    assert_eq!(store.state().user.name, "Ali");

    // First pick, then a change of mind: last write wins.
    store.dispatch(SessionIntent::SetQuizAnswer {
        question_index: 0,
        answer: 1,
    });
    store.dispatch(SessionIntent::SetQuizAnswer {
        question_index: 0,
        answer: 2,
    });
    assert_eq!(store.state().quiz.answer(0), Some(2));

    // Answer everything so that exactly 7 match the bank.
    let questions = question_bank();
    for (i, question) in questions.iter().enumerate() {
        let answer = if i < 7 {
            question.correct
        } else {
            (question.correct + 1) % 4
        };
        store.dispatch(SessionIntent::SetQuizAnswer {
            question_index: i,
            answer,
        });
    }

    // Submission computes the score once and hands it to CompleteQuiz.
    let submitted = score(questions, &store.state().quiz.answers);
    assert_eq!(submitted, 7);
    store.dispatch(SessionIntent::CompleteQuiz(submitted));

    assert!(store.state().quiz.completed);
    assert_eq!(store.state().quiz.score, 7);

    // Retry restores the quiz defaults and nothing else.
    store.dispatch(SessionIntent::ResetQuiz);
    let quiz = &store.state().quiz;
    assert_eq!(quiz.score, 0);
    assert!(!quiz.completed);
    assert_eq!(quiz.answers, [None; QUESTION_COUNT]);
    assert_eq!(quiz.current_question, 0);
    assert_eq!(store.state().user.name, "Ali");
}

#[test]
fn demo_history_grows_across_the_session() {
    let mut store = SessionStore::new();

    store.dispatch(SessionIntent::SetChatBusy(true));
    store.dispatch(SessionIntent::AppendChatMessage(ChatMessage::user(
        "What is AI?",
    )));
    store.dispatch(SessionIntent::SetChatBusy(false));
    store.dispatch(SessionIntent::AppendChatMessage(ChatMessage::assistant(
        "Artificial intelligence is…",
    )));

    let chat = &store.state().demos.chat;
    assert_eq!(chat.history.len(), 2);
    assert!(!chat.busy);

    // A quiz retry leaves every demo history untouched.
    store.dispatch(SessionIntent::ResetQuiz);
    assert_eq!(store.state().demos.chat.history.len(), 2);
}

#[test]
fn progress_updates_overwrite_in_place() {
    let mut store = SessionStore::new();
    for percent in [10, 20, 30, 40] {
        store.dispatch(SessionIntent::UpdateProgress(percent));
    }
    assert_eq!(store.state().user.progress, 40);
}
