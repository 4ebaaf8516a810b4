//! # Widget: Log Tail
//!
//! ## Responsibility
//! Renders the most recent log entries with color-coded severity levels.
//! INFO=white, WARN=yellow, ERROR=red, DEBUG=gray.
//!
//! ## Guarantees
//! - Fixed-width timestamp column for alignment
//! - Long lines truncated with `…` rather than wrapping, on char boundaries
//! - Handles empty log list gracefully
//! - Newest entries appear at the bottom unless scrolled back

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::app::{App, LogEntry, LogLevel};

/// Returns the display color for a log level.
pub fn level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Info => Color::White,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Error => Color::Red,
        LogLevel::Debug => Color::DarkGray,
    }
}

/// Truncates a string to at most `max_width` characters, adding `…` if
/// truncated.
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_width - 1).collect();
    out.push('\u{2026}');
    out
}

/// Entries visible in a window of `rows`, `offset` entries back from the
/// newest, oldest first.
pub fn visible_entries(app: &App, rows: usize) -> Vec<&LogEntry> {
    let mut entries: Vec<&LogEntry> = app
        .log_entries
        .iter()
        .rev()
        .skip(app.log_scroll_offset)
        .take(rows)
        .collect();
    entries.reverse();
    entries
}

/// Renders the log tail widget.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = if app.log_scroll_offset > 0 {
        format!(" LOG (-{}) ", app.log_scroll_offset)
    } else {
        " LOG ".to_string()
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let max_line_width = inner.width as usize;

    let lines: Vec<Line> = visible_entries(app, inner.height as usize)
        .into_iter()
        .map(|entry| {
            let color = level_color(entry.level);
            let prefix = format!("[{}] {}  ", entry.timestamp, entry.level.label());

            let remaining_width = max_line_width.saturating_sub(prefix.chars().count());
            let body = if entry.fields.is_empty() {
                entry.message.clone()
            } else {
                format!("{:<22} {}", entry.message, entry.fields)
            };
            let truncated_body = truncate_with_ellipsis(&body, remaining_width);

            Line::from(vec![
                Span::styled(
                    format!("[{}] ", entry.timestamp),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{}  ", entry.level.label()),
                    Style::default().fg(color),
                ),
                Span::styled(truncated_body, Style::default().fg(color)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockBackend;
    use crate::locale::Locale;
    use crate::tui::app::Mode;
    use std::sync::Arc;

    #[test]
    fn test_level_color_info_white() {
        assert_eq!(level_color(LogLevel::Info), Color::White);
    }

    #[test]
    fn test_level_color_warn_yellow() {
        assert_eq!(level_color(LogLevel::Warn), Color::Yellow);
    }

    #[test]
    fn test_level_color_error_red() {
        assert_eq!(level_color(LogLevel::Error), Color::Red);
    }

    #[test]
    fn test_level_color_debug_gray() {
        assert_eq!(level_color(LogLevel::Debug), Color::DarkGray);
    }

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_exact_length() {
        assert_eq!(truncate_with_ellipsis("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate_with_ellipsis("hello world", 6), "hello\u{2026}");
    }

    #[test]
    fn test_truncate_multibyte_on_char_boundary() {
        assert_eq!(truncate_with_ellipsis("분석 중 오류", 3), "분석\u{2026}");
    }

    #[test]
    fn test_truncate_width_one() {
        assert_eq!(truncate_with_ellipsis("hello", 1), "\u{2026}");
    }

    #[test]
    fn test_truncate_width_zero() {
        assert_eq!(truncate_with_ellipsis("hello", 0), "");
    }

    #[test]
    fn test_visible_entries_respects_scroll() {
        let mut app = App::new(Mode::Assessment, Locale::En, Arc::new(MockBackend::new()));
        for i in 0..5 {
            app.log(LogLevel::Info, &format!("msg {i}"), "");
        }
        let shown: Vec<&str> = visible_entries(&app, 2)
            .iter()
            .map(|e| e.message.as_str())
            .collect();
        assert_eq!(shown, vec!["msg 3", "msg 4"]);

        app.log_scroll_offset = 2;
        let shown: Vec<&str> = visible_entries(&app, 2)
            .iter()
            .map(|e| e.message.as_str())
            .collect();
        assert_eq!(shown, vec!["msg 1", "msg 2"]);
    }
}
