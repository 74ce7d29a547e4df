use std::time::Duration;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::quiz::{answered_count, format_remaining, question_bank, QUESTION_COUNT};
use crate::ui::app::App;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};

pub fn draw(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let quiz = &app.state().quiz;

    if quiz.completed {
        let rect = centered_rect(50, 5, area);
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(""),
                Line::styled(
                    "Quiz already submitted — press Enter to see your results.",
                    Style::default().fg(MUTED_TEXT),
                ),
            ])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            ),
            rect,
        );
        return;
    }

    let questions = question_bank();
    let question = &questions[quiz.current_question];
    let answered = answered_count(&quiz.answers);

    let mut status = vec![
        Span::styled(
            format!("Question {}/{}", quiz.current_question + 1, QUESTION_COUNT),
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ·  answered {answered}/{QUESTION_COUNT}"),
            Style::default().fg(MUTED_TEXT),
        ),
    ];
    if let Some(remaining) = app.quiz_remaining() {
        let timer_style = if remaining < Duration::from_secs(60) {
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        status.push(Span::styled(
            format!("  ·  ⏱ {}", format_remaining(remaining)),
            timer_style,
        ));
    }

    // One dot per question: answered, unanswered, or current.
    let dots: Vec<Span> = (0..QUESTION_COUNT)
        .map(|i| {
            if i == quiz.current_question {
                Span::styled("◆ ", Style::default().fg(ACCENT))
            } else if quiz.answer(i).is_some() {
                Span::styled("● ", Style::default().fg(STATUS_OK))
            } else {
                Span::styled("○ ", Style::default().fg(MUTED_TEXT))
            }
        })
        .collect();

    let mut lines = vec![
        Line::from(status),
        Line::from(dots),
        Line::from(""),
        Line::styled(
            question.prompt,
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];

    let selected = quiz.answer(quiz.current_question);
    for (i, option) in question.options.iter().enumerate() {
        let (marker, style) = if selected == Some(i) {
            ("●", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        } else {
            ("○", Style::default().fg(HEADER_TEXT))
        };
        lines.push(Line::styled(
            format!("  {marker} {}. {option}", i + 1),
            style,
        ));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(
        "1-4 choose · ←/→ move · Home/End jump · Enter on the last question submits",
        Style::default().fg(MUTED_TEXT),
    ));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(" Knowledge quiz ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}
