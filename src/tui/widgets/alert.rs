//! # Widget: Alert
//!
//! Modal popup for a failed submission. Drawn over whatever screen is
//! visible; the next key press closes it.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::locale::Locale;

/// Centers a `width` x `height` popup inside `area`, shrinking it to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(4));
    let h = height.min(area.height.saturating_sub(4));
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}

/// Renders `message` as a modal alert.
pub fn render(f: &mut Frame, area: Rect, message: &str, locale: Locale) {
    let popup = centered(area, 48, 7);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(" ! ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let para = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            locale.strings().alert_hint,
            Style::default().fg(Color::Yellow),
        )),
    ])
    .block(block)
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    f.render_widget(para, popup);
}
