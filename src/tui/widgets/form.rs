//! # Widget: Health Form
//!
//! ## Responsibility
//! Renders the five text inputs, the smoker radio group and the submit
//! control. The focused control is highlighted and shows a cursor.
//!
//! ## Guarantees
//! - Every control is drawn on every frame, whatever its contents
//! - A pending validation message is shown under the controls

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::assessment::form::{Field, FormState};
use crate::locale::Locale;
use crate::tui::app::App;

/// Width of the caption column.
const LABEL_WIDTH: usize = 30;

/// Radio group text, e.g. `"(•) Yes  ( ) No"`.
pub fn radio_text(is_smoker: Option<bool>, locale: Locale) -> String {
    let s = locale.strings();
    let mark = |on: bool| if on { "(\u{2022})" } else { "( )" };
    format!(
        "{} {}  {} {}",
        mark(is_smoker == Some(true)),
        s.smoker_yes,
        mark(is_smoker == Some(false)),
        s.smoker_no
    )
}

fn control_line(form: &FormState, field: Field, locale: Locale) -> Line<'static> {
    let focused = form.focus() == field;
    let marker = if focused { "\u{25b6} " } else { "  " };
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    if field == Field::Submit {
        let style = if focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green)
        };
        return Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(format!("[ {} ]", locale.strings().submit), style),
        ]);
    }

    let value = if field == Field::Smoker {
        radio_text(form.is_smoker, locale)
    } else if focused {
        format!("{}_", form.value(field))
    } else {
        form.value(field).to_string()
    };

    Line::from(vec![
        Span::styled(marker, label_style),
        Span::styled(
            format!("{:<width$}", locale.field_label(field), width = LABEL_WIDTH),
            label_style,
        ),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

/// Renders the form screen.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let locale = app.locale;
    let s = locale.strings();
    let block = Block::default()
        .title(format!(" {} ", s.form_heading))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let form = &app.assessment.form;
    let mut lines = vec![Line::from("")];
    for field in Field::ALL {
        if field == Field::Submit {
            lines.push(Line::from(""));
        }
        lines.push(control_line(form, field, locale));
    }

    lines.push(Line::from(""));
    if let Some(err) = app.assessment.form_error() {
        lines.push(Line::from(Span::styled(
            format!("  {}", locale.form_error(err)),
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from(Span::styled(
        format!("  {}", s.form_hint),
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_radio_text_unset() {
        assert_eq!(radio_text(None, Locale::En), "( ) Yes  ( ) No");
    }

    #[test]
    fn test_radio_text_selected() {
        assert_eq!(radio_text(Some(true), Locale::En), "(\u{2022}) Yes  ( ) No");
        assert_eq!(radio_text(Some(false), Locale::Ko), "( ) 예  (\u{2022}) 아니오");
    }

    #[test]
    fn test_focused_text_field_shows_cursor() {
        let mut form = FormState::new();
        form.name = "Kim".into();
        let line = control_line(&form, Field::Name, Locale::En);
        assert!(text(&line).ends_with("Kim_"));
        let line = control_line(&form, Field::Age, Locale::En);
        assert!(!text(&line).contains('_'));
    }
}
