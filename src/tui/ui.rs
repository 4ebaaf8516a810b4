//! # Module: TUI Rendering
//!
//! ## Responsibility
//! Orchestrates the overall layout by dividing the terminal into regions and
//! delegating to individual widget renderers. Handles the minimum size guard,
//! the help overlay and the modal alert.
//!
//! ## Guarantees
//! - Exactly one assessment screen is drawn per frame
//! - Minimum size guard displays a centered message if terminal is too small
//! - No panics during rendering regardless of terminal dimensions

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::app::{App, Mode};
use super::widgets;
use crate::assessment::screen::Screen;

/// Height of the log tail panel.
const LOG_HEIGHT: u16 = 6;

/// Renders the complete UI into the given frame.
pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    // Minimum size guard
    if size.width < app.min_cols || size.height < app.min_rows {
        draw_too_small(f, size, app);
        return;
    }

    if app.show_help {
        draw_help_overlay(f, size, app);
        return;
    }

    let s = app.locale.strings();
    let heading = match app.mode {
        Mode::Assessment => s.app_title,
        Mode::Dashboard => s.dashboard_title,
    };
    let title = format!(
        " {} {:>width$} ",
        heading,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        width = (size.width as usize).saturating_sub(heading.chars().count() + 8),
    );

    let outer_block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let footer = Line::from(Span::styled(
        " [q/Esc]quit  [h/F1]help  [Ctrl+C]force quit ",
        Style::default().fg(Color::DarkGray),
    ));
    let footer_block = Block::default().title_bottom(footer).borders(Borders::NONE);

    let inner = outer_block.inner(size);
    f.render_widget(outer_block, size);
    f.render_widget(footer_block, size);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(LOG_HEIGHT)])
        .split(inner);

    match app.mode {
        Mode::Assessment => draw_assessment(f, main_chunks[0], app),
        Mode::Dashboard => widgets::dashboard::render(f, main_chunks[0], app),
    }
    widgets::log::render(f, main_chunks[1], app);

    if let Some(message) = app.assessment.alert() {
        widgets::alert::render(f, size, message, app.locale);
    }
}

/// Draws the single visible assessment screen.
fn draw_assessment(f: &mut Frame, area: Rect, app: &App) {
    for (screen, visible) in app.assessment.visibility() {
        if !visible {
            continue;
        }
        match screen {
            Screen::Landing => widgets::landing::render(f, area, app),
            Screen::Form => widgets::form::render(f, area, app),
            Screen::Loading => widgets::loading::render(f, area, app),
            Screen::Result => widgets::result::render(f, area, app),
        }
    }
}

/// Renders the "terminal too small" warning.
fn draw_too_small(f: &mut Frame, area: Rect, app: &App) {
    let msg = format!(
        "Terminal too small: resize to at least {}x{}",
        app.min_cols, app.min_rows
    );
    let current_size = format!("Current size: {}x{}", area.width, area.height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let para = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            msg,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            current_size,
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(block)
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    f.render_widget(para, area);
}

/// Key binding rows for the help overlay.
pub fn help_lines(mode: Mode) -> Vec<&'static str> {
    let mut rows = vec![
        "    [q] / [Esc]   Quit (Esc only while typing)",
        "    [Ctrl+C]      Force quit",
        "    [h] / [F1]    Toggle this help",
        "    [\u{2191}\u{2193}]          Scroll log",
    ];
    if mode == Mode::Assessment {
        rows.extend([
            "    [Enter]       Start / analyze / start over",
            "    [Tab] [\u{2191}\u{2193}]    Move between fields",
            "    [\u{2190}\u{2192}] [Space]  Choose smoker option",
            "    [r]           Start over on the report",
        ]);
    }
    rows
}

/// Renders the help overlay.
fn draw_help_overlay(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = widgets::alert::centered(area, 56, 16);
    f.render_widget(Clear, popup_area);

    let mut help_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Keybindings:",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    help_text.extend(
        help_lines(app.mode)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, Style::default().fg(Color::DarkGray)))),
    );
    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        "  Press any key to close",
        Style::default().fg(Color::Yellow),
    )));

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(Paragraph::new(help_text).block(block), popup_area);
}
