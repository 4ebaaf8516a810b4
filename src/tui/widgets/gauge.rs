//! # Widget: Risk Gauges
//!
//! ## Responsibility
//! Draws score gauges as fill bars using Unicode block characters, coloured
//! by risk tier: green below 40, yellow from 40, red from 70.
//!
//! ## Guarantees
//! - Fill bars render correctly at 0%, 50%, 70%, and 100%
//! - Never panics on any width or score including NaN

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::assessment::render::{GaugeView, Tier};
use crate::locale::Locale;

/// Width reserved for the gauge caption.
const NAME_WIDTH: usize = 20;

/// Width reserved for the `"72.0 %"` label.
const LABEL_WIDTH: usize = 8;

/// Returns the color for a risk tier.
pub fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Danger => Color::Red,
        Tier::Warning => Color::Yellow,
        Tier::Safe => Color::Green,
    }
}

/// Builds a fill bar string using Unicode block characters.
///
/// # Arguments
/// * `ratio` - Fill ratio from 0.0 to 1.0.
/// * `width` - Total bar width in characters.
///
/// # Returns
/// String with `\u{2588}` (filled) and `\u{2591}` (empty) characters.
pub fn fill_bar(ratio: f64, width: usize) -> String {
    let clamped = if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (clamped * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("{}{}", "\u{2588}".repeat(filled), "\u{2591}".repeat(empty))
}

/// One gauge row: caption, bar at its current width, label.
pub fn gauge_line(gauge: &GaugeView, locale: Locale, total_width: usize) -> Line<'static> {
    let color = tier_color(gauge.tier);
    let bar_width = total_width.saturating_sub(NAME_WIDTH + LABEL_WIDTH + 3);
    let bar = fill_bar(*gauge.width.current() / 100.0, bar_width);

    Line::from(vec![
        Span::styled(
            format!("{:<width$}", locale.gauge_name(gauge.kind), width = NAME_WIDTH),
            Style::default().fg(Color::White),
        ),
        Span::raw("["),
        Span::styled(bar, Style::default().fg(color)),
        Span::raw("] "),
        Span::styled(
            format!("{:>width$}", gauge.label, width = LABEL_WIDTH),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Renders all `gauges`, one per row.
pub fn render(f: &mut Frame, area: Rect, gauges: &[GaugeView], locale: Locale) {
    let lines: Vec<Line> = gauges
        .iter()
        .map(|g| gauge_line(g, locale, area.width as usize))
        .collect();
    f.render_widget(Paragraph::new(lines), area);
}
