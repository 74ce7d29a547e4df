use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::{App, BackendStatus};
use crate::ui::layout::centered_rect;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK, STATUS_WARN,
};

pub fn draw(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let rect = centered_rect(66, 13, area);

    let status = match app.backend_status() {
        BackendStatus::Probing => {
            Line::styled("Checking the AI backend…", Style::default().fg(STATUS_WARN))
        }
        BackendStatus::Online(status) => Line::styled(
            format!("AI backend online ({status})"),
            Style::default().fg(STATUS_OK),
        ),
        BackendStatus::Offline(_) => Line::styled(
            "AI backend unreachable — demos will answer with fallback messages",
            Style::default().fg(STATUS_ERROR),
        ),
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            "Welcome to the AI Experience",
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(
            "A short guided tour of what modern AI can do:",
            Style::default().fg(MUTED_TEXT),
        ),
        Line::styled(
            "chat, vision and speech — then a quiz and your certificate.",
            Style::default().fg(MUTED_TEXT),
        ),
        Line::from(""),
        status,
        Line::from(""),
        Line::styled("Press Enter to begin", Style::default().fg(ACCENT)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            ),
        rect,
    );
}
