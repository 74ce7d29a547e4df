use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_OK};

pub fn draw(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let rect = centered_rect(56, 11, area);
    let name = app.name_input();
    let valid = name.trim().chars().count() >= 2;

    let validity = if valid {
        Line::styled("✓ looks good", Style::default().fg(STATUS_OK))
    } else {
        Line::styled(
            "at least 2 characters",
            Style::default().fg(MUTED_TEXT),
        )
    };

    let greeting = if name.trim().is_empty() {
        Line::from("")
    } else {
        Line::from(vec![
            Span::styled("Hello, ", Style::default().fg(MUTED_TEXT)),
            Span::styled(
                name.trim().to_string(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("!", Style::default().fg(MUTED_TEXT)),
        ])
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            "What is your name?",
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(
            format!("{name}▌"),
            Style::default().fg(HEADER_TEXT),
        ),
        Line::styled(
            format!("{}/50 characters", name.chars().count()),
            Style::default().fg(MUTED_TEXT),
        ),
        validity,
        Line::from(""),
        greeting,
        Line::styled("Press Enter to continue", Style::default().fg(ACCENT)),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(" It goes on your certificate ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        rect,
    );
}
