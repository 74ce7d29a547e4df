use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::quiz::{question_bank, QUESTION_COUNT};
use crate::ui::app::App;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK};

pub fn draw(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let state = app.state();
    let quiz = &state.quiz;
    let percent =
        (quiz.score as f64 / QUESTION_COUNT as f64 * 100.0).round() as u32;
    let passed = percent >= u32::from(app.config().quiz.pass_percent);

    let verdict_style = if passed {
        Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD)
    };
    let verdict = if passed {
        format!(
            "Congratulations, {}! You scored {}/{} ({percent}%) — passed.",
            state.user.name, quiz.score, QUESTION_COUNT
        )
    } else {
        format!(
            "{}, you scored {}/{} ({percent}%). Have another look below and try again!",
            state.user.name, quiz.score, QUESTION_COUNT
        )
    };

    let mut lines = vec![Line::styled(verdict, verdict_style), Line::from("")];

    for (i, question) in question_bank().iter().enumerate() {
        let given = quiz.answer(i);
        if given == Some(question.correct) {
            lines.push(Line::styled(
                format!("✓ {}. {}", i + 1, question.prompt),
                Style::default().fg(STATUS_OK),
            ));
        } else {
            lines.push(Line::styled(
                format!("✗ {}. {}", i + 1, question.prompt),
                Style::default().fg(STATUS_ERROR),
            ));
            let given_text = given
                .and_then(|answer| question.options.get(answer).copied())
                .unwrap_or("no answer");
            lines.push(Line::from(vec![
                Span::styled(
                    format!(
                        "    you: {given_text} · correct: {}",
                        question.options[question.correct]
                    ),
                    Style::default().fg(HEADER_TEXT),
                ),
                Span::styled(
                    format!(" — {}", question.explanation),
                    Style::default().fg(MUTED_TEXT),
                ),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(
        "r: retry the quiz · Enter: continue to your certificate",
        Style::default().fg(MUTED_TEXT),
    ));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(" Your results ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}
