//! # Widget: Statistics Dashboard
//!
//! ## Responsibility
//! Renders the summary cards, the age bar chart, the smoker proportion bars
//! and the BMI/risk scatter from a [`DashboardView`].
//!
//! ## Guarantees
//! - A dashboard without data draws empty frames only
//! - No widget panics on empty series or a zero total

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, BarChart, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use crate::dashboard::view::{
    BarSeries, DashboardView, ProportionChart, ScatterChart, SliceColor, SummaryCards,
};
use crate::dashboard::DashboardState;
use crate::locale::Locale;
use crate::tui::app::App;

use super::gauge::fill_bar;
use super::loading::spinner_frame;

/// Terminal colour of a proportion slice.
pub fn slice_color(color: SliceColor) -> Color {
    match color {
        SliceColor::Green => Color::Green,
        SliceColor::Red => Color::Red,
    }
}

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

/// Renders the dashboard screen.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(8)])
        .split(area);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(25),
            Constraint::Percentage(40),
        ])
        .split(chunks[1]);

    let s = app.locale.strings();
    match app.dashboard.state() {
        DashboardState::Ready(view) => draw_view(f, &chunks, &charts, view, app.locale),
        DashboardState::Loading => {
            let para = Paragraph::new(Line::from(vec![
                Span::styled(
                    format!("{} ", spinner_frame(app.frame_count)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(s.loading),
            ]))
            .alignment(Alignment::Center);
            f.render_widget(para, chunks[0]);
        }
        DashboardState::Idle | DashboardState::Unavailable => {
            f.render_widget(panel(s.total_users), card_area(chunks[0], 0));
            f.render_widget(panel(s.avg_risk_score), card_area(chunks[0], 1));
            f.render_widget(panel(s.avg_age), card_area(chunks[0], 2));
            f.render_widget(panel(s.age_chart), charts[0]);
            f.render_widget(panel(s.smoker_chart), charts[1]);
            f.render_widget(panel(s.correlation_chart), charts[2]);
        }
    }
}

fn card_area(row: Rect, index: usize) -> Rect {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(row);
    cards[index.min(2)]
}

fn draw_view(f: &mut Frame, rows: &[Rect], charts: &[Rect], view: &DashboardView, locale: Locale) {
    draw_cards(f, rows[0], &view.cards, locale);
    draw_age_chart(f, charts[0], &view.age, locale);
    draw_proportion(f, charts[1], &view.smokers, locale);
    draw_scatter(f, charts[2], &view.correlation, locale);
}

fn draw_cards(f: &mut Frame, area: Rect, cards: &SummaryCards, locale: Locale) {
    let s = locale.strings();
    for (i, (title, value)) in [
        (s.total_users, &cards.total_users),
        (s.avg_risk_score, &cards.avg_risk_score),
        (s.avg_age, &cards.avg_age),
    ]
    .into_iter()
    .enumerate()
    {
        let para = Paragraph::new(Span::styled(
            value.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .block(panel(title))
        .alignment(Alignment::Center);
        f.render_widget(para, card_area(area, i));
    }
}

fn draw_age_chart(f: &mut Frame, area: Rect, series: &BarSeries, locale: Locale) {
    let bars = series.bars();
    let data: Vec<(&str, u64)> = bars.iter().map(|(label, h)| (label.as_str(), *h)).collect();
    let count = data.len().max(1) as u16;
    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width / count).saturating_sub(1).clamp(1, 9);

    let chart = BarChart::default()
        .block(panel(locale.strings().age_chart))
        .data(data.as_slice())
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
    f.render_widget(chart, area);
}

fn draw_proportion(f: &mut Frame, area: Rect, chart: &ProportionChart, locale: Locale) {
    let block = panel(locale.strings().smoker_chart);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let bar_width = (inner.width as usize).saturating_sub(2);
    let mut lines = Vec::new();
    for (i, slice) in chart.slices.iter().enumerate() {
        let share = chart.share(i);
        let color = slice_color(slice.color);
        lines.push(Line::from(Span::styled(
            format!("{} {} ({:.0}%)", slice.label, slice.value, share * 100.0),
            Style::default().fg(color),
        )));
        lines.push(Line::from(Span::styled(
            fill_bar(share, bar_width),
            Style::default().fg(color),
        )));
        lines.push(Line::from(""));
    }
    f.render_widget(Paragraph::new(lines), inner);
}

fn draw_scatter(f: &mut Frame, area: Rect, chart: &ScatterChart, locale: Locale) {
    let [x_lo, x_hi] = chart.x_bounds();
    let [y_lo, y_hi] = chart.y_bounds();

    let dataset = Dataset::default()
        .name(chart.series.clone())
        .marker(Marker::Dot)
        .graph_type(GraphType::Scatter)
        .style(Style::default().fg(Color::Magenta))
        .data(&chart.points);

    let widget = Chart::new(vec![dataset])
        .block(panel(locale.strings().correlation_chart))
        .x_axis(
            Axis::default()
                .title(chart.x_title.clone())
                .style(Style::default().fg(Color::DarkGray))
                .bounds([x_lo, x_hi])
                .labels([format!("{x_lo:.0}"), format!("{x_hi:.0}")]),
        )
        .y_axis(
            Axis::default()
                .title(chart.y_title.clone())
                .style(Style::default().fg(Color::DarkGray))
                .bounds([y_lo, y_hi])
                .labels([format!("{y_lo:.0}"), format!("{y_hi:.0}")]),
        );
    f.render_widget(widget, area);
}
