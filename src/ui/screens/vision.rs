use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::session::ChatRole;
use crate::ui::app::{App, VisionField};
use crate::ui::screens::tail;
use crate::ui::theme::{ACCENT, ACCENT_ALT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub fn draw(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let [history_area, path_area, prompt_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .areas(area);

    let vision = &app.state().demos.vision;
    let mut lines = Vec::new();

    if vision.messages.is_empty() {
        lines.push(Line::styled(
            "Point the kiosk at a picture: enter the path of a PNG or JPEG",
            Style::default().fg(MUTED_TEXT),
        ));
        lines.push(Line::styled(
            "file and the vision model will describe what it sees.",
            Style::default().fg(MUTED_TEXT),
        ));
    }

    for message in &vision.messages {
        match message.role {
            ChatRole::User => {
                let image = message.image.as_deref().unwrap_or("image");
                lines.push(Line::from(vec![
                    Span::styled(
                        "You ",
                        Style::default().fg(ACCENT_ALT).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("[{image}] "), Style::default().fg(MUTED_TEXT)),
                    Span::styled(message.content.clone(), Style::default().fg(HEADER_TEXT)),
                ]));
            }
            ChatRole::Assistant => {
                lines.push(Line::from(vec![
                    Span::styled(
                        "AI: ",
                        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(message.content.clone(), Style::default().fg(HEADER_TEXT)),
                ]));
            }
        }
    }

    if vision.busy {
        lines.push(Line::styled(
            "Analyzing the image…",
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        ));
    }

    let title = format!(" Image analysis · {} result(s) ", vision.analyses.len());
    let visible = tail(lines, history_area.height.saturating_sub(2));
    frame.render_widget(
        Paragraph::new(visible).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        history_area,
    );

    let field_border = |field: VisionField| {
        if app.vision_focus() == field {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(GLOBAL_BORDER)
        }
    };

    frame.render_widget(
        Paragraph::new(format!("{}▌", app.vision_path())).block(
            Block::default()
                .title(" Image path · Tab switches field ")
                .borders(Borders::ALL)
                .border_style(field_border(VisionField::Path)),
        ),
        path_area,
    );

    frame.render_widget(
        Paragraph::new(format!("{}▌", app.vision_prompt())).block(
            Block::default()
                .title(" Question (optional) · Enter to analyze ")
                .borders(Borders::ALL)
                .border_style(field_border(VisionField::Prompt)),
        ),
        prompt_area,
    );
}
