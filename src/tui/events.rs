//! # Module: TUI Event Handling
//!
//! ## Responsibility
//! Polls crossterm events and translates keyboard input into app state
//! mutations. The meaning of a key depends on the [`KeyContext`]: on the form
//! letters are typed, elsewhere they are commands.
//!
//! ## Guarantees
//! - Non-blocking event polling with configurable timeout
//! - No panics on any key combination
//! - Ctrl+C always triggers quit
//! - An open alert or help overlay swallows exactly one key press

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use super::app::{App, KeyContext};
use crate::assessment::form::Field;

/// Result of polling for a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// User pressed quit (q, Esc or Ctrl+C).
    Quit,
    /// User toggled help overlay.
    Help,
    /// Closes the failure alert.
    DismissAlert,
    /// Landing → Form.
    Start,
    /// Result → Landing.
    Restart,
    /// Submit the form.
    Submit,
    /// Focus the next form control.
    NextField,
    /// Focus the previous form control.
    PrevField,
    /// Typed character for the focused control.
    Char(char),
    /// Delete the last character of the focused field.
    Backspace,
    /// Flip the smoker radio.
    ToggleSmoker,
    /// User pressed up arrow to scroll log.
    ScrollUp,
    /// User pressed down arrow to scroll log.
    ScrollDown,
    /// A terminal resize occurred.
    Resize(u16, u16),
    /// No actionable event within the poll window.
    None,
}

/// Polls for a single input event with the given timeout.
///
/// Returns `InputEvent::None` on any crossterm polling error (never panics).
pub fn poll_event(timeout: Duration, ctx: KeyContext) -> InputEvent {
    let available = match event::poll(timeout) {
        Ok(v) => v,
        Err(_) => return InputEvent::None,
    };
    if !available {
        return InputEvent::None;
    }

    match event::read() {
        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => translate_key(key, ctx),
        Ok(Event::Resize(w, h)) => InputEvent::Resize(w, h),
        _ => InputEvent::None,
    }
}

/// Applies an input event to the app state.
///
/// Must be called inside a tokio runtime, since `Submit` spawns the request.
pub fn apply_event(app: &mut App, event: InputEvent) {
    match event {
        InputEvent::Quit => app.should_quit = true,
        InputEvent::Help => app.show_help = !app.show_help,
        InputEvent::DismissAlert => app.assessment.dismiss_alert(),
        InputEvent::Start => {
            if let Err(e) = app.assessment.start() {
                debug!(error = %e, "start ignored");
            }
        }
        InputEvent::Restart => {
            if let Err(e) = app.assessment.restart() {
                debug!(error = %e, "restart ignored");
            }
        }
        InputEvent::Submit => app.submit(),
        InputEvent::NextField => app.assessment.form.focus_next(),
        InputEvent::PrevField => app.assessment.form.focus_prev(),
        InputEvent::Char(c) => {
            if app.assessment.form.insert_char(c) {
                app.assessment.clear_form_error();
            }
        }
        InputEvent::Backspace => {
            if app.assessment.form.backspace() {
                app.assessment.clear_form_error();
            }
        }
        InputEvent::ToggleSmoker => {
            app.assessment.form.toggle_smoker();
            app.assessment.clear_form_error();
        }
        InputEvent::ScrollUp => app.scroll_log_up(),
        InputEvent::ScrollDown => app.scroll_log_down(),
        InputEvent::Resize(_, _) | InputEvent::None => {}
    }
}

/// Translates a crossterm key event to an `InputEvent` for `ctx`.
pub fn translate_key(key: KeyEvent, ctx: KeyContext) -> InputEvent {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputEvent::Quit;
    }

    match ctx {
        KeyContext::Help => InputEvent::Help,
        KeyContext::Alert => InputEvent::DismissAlert,
        KeyContext::Form(focus) => translate_form_key(key, focus),
        KeyContext::Landing => match key.code {
            KeyCode::Enter => InputEvent::Start,
            _ => translate_command_key(key),
        },
        KeyContext::Result => match key.code {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => InputEvent::Restart,
            _ => translate_command_key(key),
        },
        KeyContext::Loading | KeyContext::Dashboard => translate_command_key(key),
    }
}

/// Keys shared by every non-typing screen.
fn translate_command_key(key: KeyEvent) -> InputEvent {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputEvent::Quit,
        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::F(1) => InputEvent::Help,
        KeyCode::Up => InputEvent::ScrollUp,
        KeyCode::Down => InputEvent::ScrollDown,
        _ => InputEvent::None,
    }
}

fn translate_form_key(key: KeyEvent, focus: Field) -> InputEvent {
    match key.code {
        KeyCode::Esc => InputEvent::Quit,
        KeyCode::F(1) => InputEvent::Help,
        KeyCode::Enter => InputEvent::Submit,
        KeyCode::Tab | KeyCode::Down => InputEvent::NextField,
        KeyCode::BackTab | KeyCode::Up => InputEvent::PrevField,
        KeyCode::Backspace => InputEvent::Backspace,
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if focus == Field::Smoker => {
            InputEvent::ToggleSmoker
        }
        KeyCode::Char(' ') if focus == Field::Submit => InputEvent::Submit,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => InputEvent::Char(c),
        _ => InputEvent::None,
    }
}
