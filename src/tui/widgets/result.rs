//! # Widget: Result Report
//!
//! ## Responsibility
//! Draws the rendered [`ResultView`]: title, tier banner, the three gauges,
//! risk factors and recommendations with emphasized spans in bold.
//!
//! ## Guarantees
//! - Only reads the view model; all formatting happened at render time
//! - Long lists are clipped to the available rows rather than overflowing

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::assessment::render::{ResultView, Segment};
use crate::tui::app::App;

use super::gauge::{self, tier_color};

/// Turns parsed recommendation segments into one styled line.
pub fn recommendation_line(segments: &[Segment]) -> Line<'static> {
    let mut spans = vec![Span::raw("\u{2022} ")];
    spans.extend(segments.iter().map(|seg| match seg {
        Segment::Plain(text) => Span::raw(text.clone()),
        Segment::Emphasis(text) => Span::styled(
            text.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    }));
    Line::from(spans)
}

fn header_lines(view: &ResultView) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        view.title.clone(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(status) = &view.status {
        lines.push(Line::from(Span::styled(
            status.text.clone(),
            Style::default()
                .fg(tier_color(status.tier))
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines
}

/// Renders the result screen.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let view = &app.assessment.result;
    let s = app.locale.strings();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + status
            Constraint::Length(4), // Gauges
            Constraint::Min(3),    // Factors + recommendations
            Constraint::Length(1), // Hint
        ])
        .split(inner);

    f.render_widget(Paragraph::new(header_lines(view)), chunks[0]);
    gauge::render(f, chunks[1], &view.gauges, app.locale);

    let lists = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[2]);

    let factors: Vec<Line> = view
        .factors
        .iter()
        .map(|item| Line::from(item.clone()))
        .collect();
    let factors_block = Block::default()
        .title(format!(" {} ", s.factors_heading))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(
        Paragraph::new(factors)
            .block(factors_block)
            .wrap(Wrap { trim: true }),
        lists[0],
    );

    let recommendations: Vec<Line> = view
        .recommendations
        .iter()
        .map(|segments| recommendation_line(segments))
        .collect();
    let rec_block = Block::default()
        .title(format!(" {} ", s.recommendations_heading))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(
        Paragraph::new(recommendations)
            .block(rec_block)
            .wrap(Wrap { trim: true }),
        lists[1],
    );

    f.render_widget(
        Paragraph::new(Span::styled(s.restart_hint, Style::default().fg(Color::DarkGray))),
        chunks[3],
    );
}
