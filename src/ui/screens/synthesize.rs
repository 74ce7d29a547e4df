use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::screens::tail;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub fn draw(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let [history_area, input_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(area);

    let demo = &app.state().demos.synthesis;
    let mut lines = Vec::new();

    if demo.clips.is_empty() {
        lines.push(Line::styled(
            "Type a sentence and the kiosk will turn it into spoken audio.",
            Style::default().fg(MUTED_TEXT),
        ));
        lines.push(Line::styled(
            "Each clip is saved as a WAV file you can play back.",
            Style::default().fg(MUTED_TEXT),
        ));
    }

    for clip in &demo.clips {
        lines.push(Line::from(vec![
            Span::styled("♪ ", Style::default().fg(ACCENT)),
            Span::styled(format!("“{}”", clip.text), Style::default().fg(HEADER_TEXT)),
        ]));
        lines.push(Line::styled(
            format!(
                "   {} ({:.1} KiB)",
                clip.path.display(),
                clip.byte_len as f64 / 1024.0
            ),
            Style::default().fg(MUTED_TEXT),
        ));
    }

    if demo.generating {
        lines.push(Line::styled(
            "Generating audio…",
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        ));
    }

    let visible = tail(lines, history_area.height.saturating_sub(2));
    frame.render_widget(
        Paragraph::new(visible).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(" Text to speech ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        history_area,
    );

    frame.render_widget(
        Paragraph::new(format!("{}▌", app.speak_input())).block(
            Block::default()
                .title(" Text to speak · Enter to synthesize ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT)),
        ),
        input_area,
    );
}
