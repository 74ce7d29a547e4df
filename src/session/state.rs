//! The session aggregate: one visitor's pass through the kiosk.
//!
//! A fresh all-defaults session is created on startup and discarded on exit;
//! nothing is persisted. Demo histories only ever grow, and the quiz
//! sub-state is the only part that can be reset mid-session.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::quiz::QUESTION_COUNT;
use crate::session::store::AppState;

/// Root state aggregate for the whole kiosk journey.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub user: UserProfile,
    pub quiz: QuizState,
    pub demos: DemoStates,
}

impl AppState for SessionState {}

/// Visitor identity and overall journey progress.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserProfile {
    /// Trimmed display name, validated (length >= 2) before dispatch.
    pub name: String,
    /// Journey progress in percent, derived from the current step.
    pub progress: u8,
}

/// Quiz progress for the current attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizState {
    /// Always within `[0, QUESTION_COUNT - 1]`.
    pub current_question: usize,
    /// One slot per question; `None` means not answered yet, which is
    /// distinct from an answer of `Some(0)`.
    pub answers: [Option<usize>; QUESTION_COUNT],
    /// Set exactly once per attempt by `CompleteQuiz`; derived, never
    /// incrementally updated.
    pub score: u32,
    pub completed: bool,
}

impl Default for QuizState {
    fn default() -> Self {
        Self {
            current_question: 0,
            answers: [None; QUESTION_COUNT],
            score: 0,
            completed: false,
        }
    }
}

impl QuizState {
    /// The selected option for question `index`, if any.
    pub fn answer(&self, index: usize) -> Option<usize> {
        self.answers.get(index).copied().flatten()
    }
}

/// One record per AI capability demo, each independently owned.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DemoStates {
    pub chat: ChatDemoState,
    pub vision: VisionDemoState,
    pub transcription: TranscriptionDemoState,
    pub synthesis: SynthesisDemoState,
}

/// Who produced a conversation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry in the chat demo conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::now(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::now(ChatRole::Assistant, content)
    }

    fn now(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            sent_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatDemoState {
    /// Append-only conversation history, oldest first.
    pub history: Vec<ChatMessage>,
    pub busy: bool,
}

/// One entry in the chat-style vision conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct VisionMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    /// Name of the image the entry refers to, when it carries one.
    pub image: Option<String>,
    pub sent_at: DateTime<Utc>,
}

impl VisionMessage {
    pub fn user(content: impl Into<String>, image: Option<String>) -> Self {
        Self::now(ChatRole::User, content, image)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::now(ChatRole::Assistant, content, None)
    }

    fn now(role: ChatRole, content: impl Into<String>, image: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            image,
            sent_at: Utc::now(),
        }
    }
}

/// Vision demo state.
///
/// `captures` and `analyses` are kept in lockstep (entry i of one pairs with
/// entry i of the other); `messages` is the unified history behind the
/// chat-style screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisionDemoState {
    pub captures: Vec<String>,
    pub analyses: Vec<String>,
    pub messages: Vec<VisionMessage>,
    pub busy: bool,
}

/// One speech-to-text result, successful or failed.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionRecord {
    pub id: Uuid,
    pub text: String,
    pub language: Option<String>,
    pub confidence: Option<f32>,
    /// Failure records stay in the history like any other entry.
    pub is_error: bool,
    pub taken_at: DateTime<Utc>,
}

impl TranscriptionRecord {
    pub fn ok(text: impl Into<String>, language: Option<String>, confidence: Option<f32>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            language,
            confidence,
            is_error: false,
            taken_at: Utc::now(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            language: None,
            confidence: None,
            is_error: true,
            taken_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TranscriptionDemoState {
    pub records: Vec<TranscriptionRecord>,
    /// True while the external capture helper is running.
    pub recording: bool,
    pub busy: bool,
}

/// One synthesized audio clip, written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    pub id: Uuid,
    pub text: String,
    pub voice: String,
    pub speed: f32,
    pub path: PathBuf,
    pub byte_len: usize,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SynthesisDemoState {
    pub clips: Vec<AudioClip>,
    pub generating: bool,
}
