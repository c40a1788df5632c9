use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::grader::GradeOutcome;

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(outcome) = app.outcome() else {
        return;
    };

    let grade_color = get_grade_color(outcome.score);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], app, outcome, grade_color);
    render_question_breakdown(frame, chunks[2], app, outcome, app.result_scroll());
    render_controls(frame, chunks[3]);
}

fn get_grade_color(score: f64) -> Color {
    match score as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    outcome: &GradeOutcome,
    grade_color: Color,
) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "ASSESSMENT SUBMITTED",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(format!("Candidate: {}", app.candidate_id()).fg(Color::DarkGray)),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{}%  ({} / {} correct)",
                outcome.display_score(),
                outcome.correct,
                outcome.total
            ),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    outcome: &GradeOutcome,
    scroll: usize,
) {
    let lines: Vec<Line> = app
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let picked = outcome.answers.get(&question.id);
            let (symbol, color) = match picked {
                Some(option) if question.is_correct(option) => ("+", Color::Green),
                Some(_) => ("-", Color::Red),
                None => ("·", Color::DarkGray),
            };

            let preview = truncate_question(&question.text);

            let mut spans = vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(preview, Style::default().fg(Color::Gray)),
            ];
            if picked.is_none() {
                spans.push(Span::styled(
                    "  (no answer)",
                    Style::default().fg(Color::DarkGray),
                ));
            }

            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
