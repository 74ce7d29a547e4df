use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::nav::Step;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Navigation hints; the back/next hints dim out at the journey boundaries.
pub struct NavFooter;

impl NavFooter {
    pub fn widget(step: Step, area: Rect) -> Paragraph<'static> {
        let active = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let inactive = Style::default()
            .fg(MUTED_TEXT)
            .add_modifier(Modifier::CROSSED_OUT | Modifier::DIM);

        let back_style = if step.can_go_back() { active } else { inactive };
        let next_style = if step.can_go_forward() { active } else { inactive };

        let hints = vec![
            Span::styled(" ◀ Ctrl+P: Back", back_style),
            Span::styled(" │ ", active),
            Span::styled("Ctrl+N: Next ▶", next_style),
            Span::styled(" │ ", active),
            Span::styled("Ctrl+W: Start over", active),
            Span::styled(" │ ", active),
            Span::styled("Ctrl+Q: Quit", active),
        ];

        let version = format!("v{} ", VERSION);
        let hints_width: usize = hints.iter().map(|span| span.content.chars().count()).sum();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version.chars().count());

        let mut spans = hints;
        spans.push(Span::styled(" ".repeat(padding), active));
        spans.push(Span::styled(version, active));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
