use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::nav::Step;
use crate::ui::app::App;
use crate::ui::footer::NavFooter;
use crate::ui::header::ProgressHeader;
use crate::ui::layout::layout_regions;
use crate::ui::screens;
use crate::ui::theme::STATUS_WARN;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(ProgressHeader::widget(app.step()), header);

    frame.render_widget(Clear, body);
    match app.step() {
        Step::Welcome => screens::welcome::draw(frame, body, app),
        Step::Info => screens::info::draw(frame, body),
        Step::NameEntry => screens::name_entry::draw(frame, body, app),
        Step::DemoChat => screens::chat::draw(frame, body, app),
        Step::DemoVision => screens::vision::draw(frame, body, app),
        Step::DemoSpeechToText => screens::transcribe::draw(frame, body, app),
        Step::DemoTextToSpeech => screens::synthesize::draw(frame, body, app),
        Step::Quiz => screens::quiz::draw(frame, body, app),
        Step::Results => screens::results::draw(frame, body, app),
        Step::Certificate => screens::certificate::draw(frame, body, app),
    }

    frame.render_widget(NavFooter::widget(app.step(), footer), footer);

    // Transient notice on the last body row.
    if let Some(notice) = app.notice() {
        if body.height > 0 {
            let line = Rect {
                x: body.x,
                y: body.y + body.height - 1,
                width: body.width,
                height: 1,
            };
            frame.render_widget(Clear, line);
            frame.render_widget(
                Paragraph::new(format!(" {notice}")).style(Style::default().fg(STATUS_WARN)),
                line,
            );
        }
    }
}
