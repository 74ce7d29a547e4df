//! One render module per journey step.

pub mod certificate;
pub mod chat;
pub mod info;
pub mod name_entry;
pub mod quiz;
pub mod results;
pub mod synthesize;
pub mod transcribe;
pub mod vision;
pub mod welcome;

use ratatui::text::Line;

/// Keep the newest lines that fit in `height` rows.
pub(crate) fn tail(mut lines: Vec<Line<'_>>, height: u16) -> Vec<Line<'_>> {
    let max = height as usize;
    if lines.len() > max {
        lines.drain(..lines.len() - max);
    }
    lines
}
