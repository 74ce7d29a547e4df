//! The session reducer: pure transitions over [`SessionState`].

use crate::quiz::QUESTION_COUNT;
use crate::session::intent::SessionIntent;
use crate::session::state::{QuizState, SessionState};
use crate::session::store::Reducer;

/// Applies [`SessionIntent`]s to the session aggregate.
///
/// Pure and total: every intent yields a state, and validation (name length,
/// request plausibility) happens at the call site before dispatch.
pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::SetUserName(name) => {
                state.user.name = name.trim().to_string();
            }
            SessionIntent::UpdateProgress(progress) => {
                state.user.progress = progress;
            }

            SessionIntent::AppendChatMessage(message) => {
                state.demos.chat.history.push(message);
            }
            SessionIntent::SetChatBusy(busy) => {
                state.demos.chat.busy = busy;
            }

            SessionIntent::AppendVisionResult { capture, analysis } => {
                // The two lists advance together so entry i always pairs up.
                state.demos.vision.captures.push(capture);
                state.demos.vision.analyses.push(analysis);
            }
            SessionIntent::AppendVisionMessage(message) => {
                state.demos.vision.messages.push(message);
            }
            SessionIntent::SetVisionBusy(busy) => {
                state.demos.vision.busy = busy;
            }

            SessionIntent::AppendTranscription(record) => {
                state.demos.transcription.records.push(record);
            }
            SessionIntent::SetRecordingFlag(recording) => {
                state.demos.transcription.recording = recording;
            }
            SessionIntent::SetTranscriptionBusy(busy) => {
                state.demos.transcription.busy = busy;
            }

            SessionIntent::AppendSynthesizedAudio(clip) => {
                state.demos.synthesis.clips.push(clip);
            }
            SessionIntent::SetSynthesisBusy(generating) => {
                state.demos.synthesis.generating = generating;
            }

            SessionIntent::SetQuizAnswer {
                question_index,
                answer,
            } => {
                if let Some(slot) = state.quiz.answers.get_mut(question_index) {
                    *slot = Some(answer);
                }
            }
            SessionIntent::NextQuestion => {
                state.quiz.current_question =
                    (state.quiz.current_question + 1).min(QUESTION_COUNT - 1);
            }
            SessionIntent::PreviousQuestion => {
                state.quiz.current_question = state.quiz.current_question.saturating_sub(1);
            }
            SessionIntent::SetCurrentQuestion(index) => {
                state.quiz.current_question = index;
            }
            SessionIntent::CompleteQuiz(score) => {
                state.quiz.completed = true;
                state.quiz.score = score;
            }
            SessionIntent::ResetQuiz => {
                state.quiz = QuizState::default();
            }
        }

        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::state::ChatMessage;

    fn reduce(state: SessionState, intent: SessionIntent) -> SessionState {
        SessionReducer::reduce(state, intent)
    }

    #[test]
    fn set_user_name_trims_payload() {
        let state = reduce(
            SessionState::default(),
            SessionIntent::SetUserName("  Aisyah  ".into()),
        );
        assert_eq!(state.user.name, "Aisyah");
    }

    #[test]
    fn update_progress_overwrites() {
        let state = reduce(SessionState::default(), SessionIntent::UpdateProgress(40));
        assert_eq!(state.user.progress, 40);
    }

    #[test]
    fn chat_busy_toggles_only_chat() {
        let state = reduce(SessionState::default(), SessionIntent::SetChatBusy(true));
        assert!(state.demos.chat.busy);
        assert!(!state.demos.vision.busy);
        assert!(!state.demos.transcription.busy);
    }

    #[test]
    fn vision_result_keeps_lists_in_lockstep() {
        let state = reduce(
            SessionState::default(),
            SessionIntent::AppendVisionResult {
                capture: "photo.png".into(),
                analysis: "a cat".into(),
            },
        );
        assert_eq!(state.demos.vision.captures.len(), 1);
        assert_eq!(state.demos.vision.analyses.len(), 1);
        assert_eq!(state.demos.vision.captures[0], "photo.png");
        assert_eq!(state.demos.vision.analyses[0], "a cat");
    }

    #[test]
    fn out_of_range_answer_is_ignored() {
        let state = reduce(
            SessionState::default(),
            SessionIntent::SetQuizAnswer {
                question_index: QUESTION_COUNT,
                answer: 1,
            },
        );
        assert_eq!(state.quiz.answers, [None; QUESTION_COUNT]);
    }

    #[test]
    fn complete_quiz_sets_score_and_flag_atomically() {
        let state = reduce(SessionState::default(), SessionIntent::CompleteQuiz(7));
        assert!(state.quiz.completed);
        assert_eq!(state.quiz.score, 7);
    }

    #[test]
    fn reset_quiz_leaves_demo_histories_alone() {
        let mut state = SessionState::default();
        state = reduce(
            state,
            SessionIntent::AppendChatMessage(ChatMessage::user("hello")),
        );
        state = reduce(state, SessionIntent::CompleteQuiz(3));
        state = reduce(state, SessionIntent::ResetQuiz);

        assert_eq!(state.quiz, QuizState::default());
        assert_eq!(state.demos.chat.history.len(), 1);
    }
}
