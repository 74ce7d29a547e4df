//! Quiz engine: question bank, scoring, and the attempt countdown.

mod questions;
mod scoring;
mod timer;

pub use questions::{question_bank, Question, QUESTION_COUNT};
pub use scoring::{answered_count, score};
pub use timer::{format_remaining, QuizTimer};
