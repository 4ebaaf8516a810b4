//! # Widget: Landing
//!
//! Welcome screen with the start prompt.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::assessment::screen::Screen;
use crate::tui::app::App;

/// Renders the landing screen.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let s = app.locale.strings();
    let block = Block::default()
        .title(format!(" {} ", Screen::Landing.id()))
        .title_style(Style::default().fg(Color::DarkGray))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let para = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            s.landing_heading,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(s.landing_body, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(
            s.landing_start,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .block(block)
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    f.render_widget(para, area);
}
