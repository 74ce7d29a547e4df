use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::screens::tail;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};

pub fn draw(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let [history_area, input_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(area);

    let demo = &app.state().demos.transcription;
    let mut lines = Vec::new();

    if demo.records.is_empty() {
        lines.push(Line::styled(
            "Speak to the kiosk: record a clip (Ctrl+R) or enter the path",
            Style::default().fg(MUTED_TEXT),
        ));
        lines.push(Line::styled(
            "of a WAV file, and the model will write down what was said.",
            Style::default().fg(MUTED_TEXT),
        ));
    }

    for record in &demo.records {
        if record.is_error {
            lines.push(Line::styled(
                format!("✗ {}", record.text),
                Style::default().fg(STATUS_ERROR),
            ));
            continue;
        }

        let mut meta = Vec::new();
        if let Some(language) = &record.language {
            meta.push(language.clone());
        }
        if let Some(confidence) = record.confidence {
            meta.push(format!("{:.0}% confident", confidence * 100.0));
        }
        let mut spans = vec![Span::styled(
            format!("“{}”", record.text),
            Style::default().fg(HEADER_TEXT),
        )];
        if !meta.is_empty() {
            spans.push(Span::styled(
                format!("  [{}]", meta.join(", ")),
                Style::default().fg(MUTED_TEXT),
            ));
        }
        lines.push(Line::from(spans));
    }

    if demo.busy {
        lines.push(Line::styled(
            "Transcribing…",
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        ));
    }

    let title = if demo.recording {
        " Speech to text · ● REC (Ctrl+R stops) "
    } else {
        " Speech to text "
    };
    let border = if demo.recording {
        Style::default().fg(STATUS_ERROR)
    } else {
        Style::default().fg(GLOBAL_BORDER)
    };

    let visible = tail(lines, history_area.height.saturating_sub(2));
    frame.render_widget(
        Paragraph::new(visible)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border),
            ),
        history_area,
    );

    frame.render_widget(
        Paragraph::new(format!("{}▌", app.transcribe_path())).block(
            Block::default()
                .title(" Audio file path · Enter to transcribe · Ctrl+R to record ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT)),
        ),
        input_area,
    );
}
