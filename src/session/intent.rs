//! The closed set of named transitions over the session state.

use crate::session::state::{AudioClip, ChatMessage, TranscriptionRecord, VisionMessage};
use crate::session::store::Intent;

/// Every way the session state can change.
///
/// The enum is closed on purpose: the reducer's match is total, so the store
/// is a total function over its transition set and can never fail.
#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// Set the visitor name (payload is trimmed by the reducer).
    SetUserName(String),
    /// Set the journey progress percentage.
    UpdateProgress(u8),

    AppendChatMessage(ChatMessage),
    SetChatBusy(bool),

    /// Append a capture and its analysis to the lockstep vision lists.
    AppendVisionResult { capture: String, analysis: String },
    /// Append one entry to the unified chat-style vision history.
    AppendVisionMessage(VisionMessage),
    SetVisionBusy(bool),

    AppendTranscription(TranscriptionRecord),
    SetRecordingFlag(bool),
    SetTranscriptionBusy(bool),

    AppendSynthesizedAudio(AudioClip),
    SetSynthesisBusy(bool),

    /// Overwrite the answer for one question (last write wins). An
    /// out-of-range index is ignored.
    SetQuizAnswer { question_index: usize, answer: usize },
    /// Advance one question, clamped at the last.
    NextQuestion,
    /// Go back one question, clamped at the first.
    PreviousQuestion,
    /// Jump straight to a question. Not clamped: callers pass valid indices.
    SetCurrentQuestion(usize),
    /// Mark the quiz finished with the submitted score.
    CompleteQuiz(u32),
    /// Restore the quiz sub-state for a fresh attempt. User identity and
    /// demo histories are untouched.
    ResetQuiz,
}

impl Intent for SessionIntent {}
