use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Gauge};

use crate::nav::Step;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};

/// Journey progress bar: position, step title, and percentage.
pub struct ProgressHeader;

impl ProgressHeader {
    pub fn widget(step: Step) -> Gauge<'static> {
        let label = format!(
            "Step {}/{} · {} · {}%",
            step.position(),
            Step::total(),
            step.title(),
            step.progress_percent()
        );

        Gauge::default()
            .block(
                Block::default()
                    .title(" AI Experience Kiosk ")
                    .title_style(Style::default().fg(HEADER_TEXT))
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
            .gauge_style(Style::default().fg(ACCENT).bg(Color::Rgb(0x26, 0x26, 0x26)))
            .ratio(f64::from(step.progress_percent()) / 100.0)
            .label(label)
    }
}
