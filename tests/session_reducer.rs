use aikiosk::quiz::QUESTION_COUNT;
use aikiosk::session::{
    ChatMessage, ChatRole, Reducer, SessionIntent, SessionReducer, SessionState,
    TranscriptionRecord, VisionMessage,
};

fn reduce_all(intents: Vec<SessionIntent>) -> SessionState {
    intents
        .into_iter()
        .fold(SessionState::default(), SessionReducer::reduce)
}

// -- user ---------------------------------------------------------------------

#[test]
fn set_user_name_stores_trimmed_name() {
    let state = reduce_all(vec![SessionIntent::SetUserName("  Ali  ".to_string())]);
    assert_eq!(state.user.name, "Ali");
}

#[test]
fn set_user_name_last_write_wins() {
    let state = reduce_all(vec![
        SessionIntent::SetUserName("Ali".to_string()),
        SessionIntent::SetUserName("Siti".to_string()),
    ]);
    assert_eq!(state.user.name, "Siti");
}

// -- quiz answers -------------------------------------------------------------

#[test]
fn answers_default_to_unset() {
    let state = SessionState::default();
    assert_eq!(state.quiz.answers, [None; QUESTION_COUNT]);
}

#[test]
fn answer_zero_is_distinct_from_unanswered() {
    let state = reduce_all(vec![SessionIntent::SetQuizAnswer {
        question_index: 3,
        answer: 0,
    }]);
    assert_eq!(state.quiz.answer(3), Some(0));
    assert_eq!(state.quiz.answer(4), None);
}

#[test]
fn reanswering_overwrites_last_write_wins() {
    let state = reduce_all(vec![
        SessionIntent::SetQuizAnswer {
            question_index: 0,
            answer: 1,
        },
        SessionIntent::SetQuizAnswer {
            question_index: 0,
            answer: 2,
        },
    ]);
    assert_eq!(state.quiz.answer(0), Some(2));
}

#[test]
fn untouched_indices_stay_unset() {
    let state = reduce_all(vec![
        SessionIntent::SetQuizAnswer {
            question_index: 2,
            answer: 3,
        },
        SessionIntent::SetQuizAnswer {
            question_index: 5,
            answer: 1,
        },
    ]);
    for i in [0, 1, 3, 4, 6, 7, 8, 9] {
        assert_eq!(state.quiz.answer(i), None, "index {i} should be unset");
    }
}

// -- question navigation ------------------------------------------------------

#[test]
fn next_question_clamps_at_last() {
    let intents = std::iter::repeat_with(|| SessionIntent::NextQuestion)
        .take(QUESTION_COUNT * 3)
        .collect();
    let state = reduce_all(intents);
    assert_eq!(state.quiz.current_question, QUESTION_COUNT - 1);
}

#[test]
fn previous_question_clamps_at_first() {
    let intents = std::iter::repeat_with(|| SessionIntent::PreviousQuestion)
        .take(25)
        .collect();
    let state = reduce_all(intents);
    assert_eq!(state.quiz.current_question, 0);
}

#[test]
fn next_then_previous_round_trips() {
    let state = reduce_all(vec![
        SessionIntent::NextQuestion,
        SessionIntent::NextQuestion,
        SessionIntent::PreviousQuestion,
    ]);
    assert_eq!(state.quiz.current_question, 1);
}

#[test]
fn set_current_question_jumps_directly() {
    let state = reduce_all(vec![SessionIntent::SetCurrentQuestion(7)]);
    assert_eq!(state.quiz.current_question, 7);
}

// -- quiz completion and reset ------------------------------------------------

#[test]
fn complete_quiz_sets_score_once() {
    let state = reduce_all(vec![SessionIntent::CompleteQuiz(7)]);
    assert!(state.quiz.completed);
    assert_eq!(state.quiz.score, 7);
}

#[test]
fn double_complete_overwrites_with_latest() {
    // The store does not guard against a second submission; the UI does.
    let state = reduce_all(vec![
        SessionIntent::CompleteQuiz(7),
        SessionIntent::CompleteQuiz(7),
    ]);
    assert!(state.quiz.completed);
    assert_eq!(state.quiz.score, 7);
}

#[test]
fn reset_quiz_restores_defaults_only_for_quiz() {
    let state = reduce_all(vec![
        SessionIntent::SetUserName("Ali".to_string()),
        SessionIntent::AppendChatMessage(ChatMessage::user("hello")),
        SessionIntent::SetQuizAnswer {
            question_index: 0,
            answer: 2,
        },
        SessionIntent::SetCurrentQuestion(9),
        SessionIntent::CompleteQuiz(4),
        SessionIntent::ResetQuiz,
    ]);

    assert_eq!(state.quiz.current_question, 0);
    assert_eq!(state.quiz.answers, [None; QUESTION_COUNT]);
    assert_eq!(state.quiz.score, 0);
    assert!(!state.quiz.completed);

    assert_eq!(state.user.name, "Ali");
    assert_eq!(state.demos.chat.history.len(), 1);
}

// -- demo histories -----------------------------------------------------------

#[test]
fn chat_history_preserves_insertion_order() {
    let first = ChatMessage::user("one");
    let second = ChatMessage::assistant("two");
    let third = ChatMessage::user("three");
    let ids = [first.id, second.id, third.id];

    let state = reduce_all(vec![
        SessionIntent::AppendChatMessage(first),
        SessionIntent::AppendChatMessage(second),
        SessionIntent::AppendChatMessage(third),
    ]);

    let history = &state.demos.chat.history;
    assert_eq!(history.len(), 3);
    for (message, id) in history.iter().zip(ids) {
        assert_eq!(message.id, id);
    }
    assert_eq!(history[0].content, "one");
    assert_eq!(history[1].role, ChatRole::Assistant);
    assert_eq!(history[2].content, "three");
}

#[test]
fn vision_result_appends_to_both_lists() {
    let state = reduce_all(vec![
        SessionIntent::AppendVisionResult {
            capture: "a.png".to_string(),
            analysis: "first".to_string(),
        },
        SessionIntent::AppendVisionResult {
            capture: "b.jpg".to_string(),
            analysis: "second".to_string(),
        },
    ]);
    assert_eq!(state.demos.vision.captures, vec!["a.png", "b.jpg"]);
    assert_eq!(state.demos.vision.analyses, vec!["first", "second"]);
}

#[test]
fn vision_messages_are_a_separate_history() {
    let state = reduce_all(vec![
        SessionIntent::AppendVisionMessage(VisionMessage::user(
            "what is this?",
            Some("a.png".to_string()),
        )),
        SessionIntent::AppendVisionMessage(VisionMessage::assistant("a cat")),
    ]);
    assert_eq!(state.demos.vision.messages.len(), 2);
    assert!(state.demos.vision.captures.is_empty());
    assert!(state.demos.vision.analyses.is_empty());
}

#[test]
fn transcription_errors_are_ordinary_history_entries() {
    let state = reduce_all(vec![
        SessionIntent::AppendTranscription(TranscriptionRecord::ok(
            "hello world",
            Some("en".to_string()),
            Some(0.93),
        )),
        SessionIntent::AppendTranscription(TranscriptionRecord::error("backend down")),
    ]);
    let records = &state.demos.transcription.records;
    assert_eq!(records.len(), 2);
    assert!(!records[0].is_error);
    assert!(records[1].is_error);
}

#[test]
fn busy_flags_are_independent_per_demo() {
    let state = reduce_all(vec![
        SessionIntent::SetChatBusy(true),
        SessionIntent::SetVisionBusy(true),
        SessionIntent::SetChatBusy(false),
        SessionIntent::SetRecordingFlag(true),
        SessionIntent::SetSynthesisBusy(true),
    ]);
    assert!(!state.demos.chat.busy);
    assert!(state.demos.vision.busy);
    assert!(state.demos.transcription.recording);
    assert!(!state.demos.transcription.busy);
    assert!(state.demos.synthesis.generating);
}
