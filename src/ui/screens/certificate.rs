use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_OK};

pub fn draw(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let Some(certificate) = app.certificate() else {
        return;
    };

    let mut lines: Vec<Line> = certificate
        .render_text()
        .lines()
        .map(|line| Line::styled(line.to_string(), Style::default().fg(HEADER_TEXT)))
        .collect();

    lines.push(Line::from(""));
    match app.certificate_file() {
        Some(path) => lines.push(Line::styled(
            format!("Saved to {}", path.display()),
            Style::default().fg(STATUS_OK),
        )),
        None => lines.push(Line::styled(
            "Press s to save a copy",
            Style::default().fg(ACCENT),
        )),
    }
    lines.push(Line::styled(
        "Thank you for visiting — Ctrl+W starts the tour over.",
        Style::default().fg(MUTED_TEXT),
    ));

    let height = (lines.len() as u16).saturating_add(2);
    let rect = centered_rect(68, height, area);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        rect,
    );
}
