use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::session::ChatRole;
use crate::ui::app::{App, SUGGESTED_PROMPTS};
use crate::ui::screens::tail;
use crate::ui::theme::{ACCENT, ACCENT_ALT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub fn draw(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let [history_area, input_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(area);

    let chat = &app.state().demos.chat;
    let mut lines = Vec::new();

    if chat.history.is_empty() {
        lines.push(Line::styled(
            "Ask the AI assistant anything — or press Tab for a starter question:",
            Style::default().fg(MUTED_TEXT),
        ));
        lines.push(Line::from(""));
        for prompt in SUGGESTED_PROMPTS {
            lines.push(Line::styled(
                format!("  • {prompt}"),
                Style::default().fg(MUTED_TEXT),
            ));
        }
    } else {
        for message in &chat.history {
            let (speaker, color) = match message.role {
                ChatRole::User => ("You", ACCENT_ALT),
                ChatRole::Assistant => ("AI", ACCENT),
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{speaker}: "),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    message.content.clone(),
                    Style::default().fg(HEADER_TEXT),
                ),
            ]));
        }
    }

    if chat.busy {
        lines.push(Line::styled(
            "AI is typing…",
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        ));
    }

    let visible = tail(lines, history_area.height.saturating_sub(2));
    frame.render_widget(
        Paragraph::new(visible).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(" Chat with a language model ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        history_area,
    );

    frame.render_widget(
        Paragraph::new(format!("{}▌", app.chat_input())).block(
            Block::default()
                .title(" Message · Enter to send · Tab for ideas ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT)),
        ),
        input_area,
    );
}
