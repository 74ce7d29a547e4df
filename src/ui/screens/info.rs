use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::theme::{ACCENT, ACCENT_ALT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub fn draw(frame: &mut Frame<'_>, area: Rect) {
    let heading = Style::default()
        .fg(HEADER_TEXT)
        .add_modifier(Modifier::BOLD);
    let topic = Style::default()
        .fg(ACCENT_ALT)
        .add_modifier(Modifier::BOLD);
    let body = Style::default().fg(MUTED_TEXT);

    let entry = |name: &'static str, text: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {name}  "), topic),
            Span::styled(text, body),
        ])
    };

    let lines = vec![
        Line::from(""),
        Line::styled("  What you are about to try", heading),
        Line::from(""),
        entry(
            "Chat (LLM)",
            "A large language model that understands and writes text.",
        ),
        Line::from(""),
        entry(
            "Vision (VLM)",
            "A model that looks at an image and describes what it sees.",
        ),
        Line::from(""),
        entry(
            "Speech-to-Text",
            "A model that turns a voice recording into written words.",
        ),
        Line::from(""),
        entry(
            "Text-to-Speech",
            "A model that reads your text out loud as synthesized audio.",
        ),
        Line::from(""),
        Line::styled(
            "  After the demos, a ten-question quiz checks what stuck —",
            body,
        ),
        Line::styled("  finish it and the kiosk prints your certificate.", body),
        Line::from(""),
        Line::styled("  Press Enter to continue", Style::default().fg(ACCENT)),
    ];

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(" About this tour ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}
