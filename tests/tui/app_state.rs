//! Integration tests for App state transitions driven by key events.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use health_risk_report::assessment::form::Field;
use health_risk_report::assessment::screen::Screen;
use health_risk_report::tui::app::{App, KeyContext, LogLevel, Mode, LOG_ENTRIES_CAP};
use health_risk_report::tui::events::{apply_event, translate_key, InputEvent};
use health_risk_report::{Locale, MockBackend};

fn press(app: &mut App, code: KeyCode) {
    let event = translate_key(KeyEvent::new(code, KeyModifiers::NONE), app.key_context());
    apply_event(app, event);
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Polls until `done` holds or about a second has passed.
async fn pump(app: &mut App, done: impl Fn(&App) -> bool) {
    for _ in 0..200 {
        app.poll_tasks();
        if done(app) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

fn fill_form_by_keys(app: &mut App) {
    press(app, KeyCode::Enter);
    assert_eq!(app.key_context(), KeyContext::Form(Field::Name));
    type_text(app, "Kim");
    press(app, KeyCode::Tab);
    type_text(app, "45");
    press(app, KeyCode::Tab);
    type_text(app, "28.5");
    press(app, KeyCode::Tab);
    type_text(app, "135");
    press(app, KeyCode::Tab);
    type_text(app, "110");
    press(app, KeyCode::Tab);
    press(app, KeyCode::Char('y'));
}

#[tokio::test]
async fn test_keyboard_walkthrough_reaches_result() {
    let backend = Arc::new(MockBackend::new().with_delay(Duration::ZERO));
    let mut app = App::new(Mode::Assessment, Locale::En, backend.clone());

    fill_form_by_keys(&mut app);
    assert_eq!(app.assessment.form.bmi, "28.5");
    assert_eq!(app.assessment.form.is_smoker, Some(true));

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.assessment.screen(), Screen::Loading);
    assert_eq!(app.key_context(), KeyContext::Loading);

    pump(&mut app, |a| a.assessment.screen() == Screen::Result).await;
    assert_eq!(app.assessment.screen(), Screen::Result);
    assert_eq!(backend.analyze_calls(), 1);

    let messages: Vec<&str> = app.log_entries.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["Submission sent", "Report ready"]);

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.assessment.screen(), Screen::Landing);
    assert!(app.assessment.form.name.is_empty());
}

#[tokio::test]
async fn test_failure_raises_alert_that_swallows_one_key() {
    let backend = Arc::new(
        MockBackend::new()
            .failing("connection refused")
            .with_delay(Duration::ZERO),
    );
    let mut app = App::new(Mode::Assessment, Locale::En, backend);
    fill_form_by_keys(&mut app);
    press(&mut app, KeyCode::Enter);

    pump(&mut app, |a| a.assessment.alert().is_some()).await;
    assert_eq!(app.key_context(), KeyContext::Alert);
    assert_eq!(app.assessment.screen(), Screen::Form);
    assert_eq!(app.assessment.alerts_raised(), 1);

    let last = app.log_entries.back().expect("log entry");
    assert_eq!(last.level, LogLevel::Error);
    assert!(last.fields.contains("connection refused"));

    // The dismissing key is not typed into the form.
    press(&mut app, KeyCode::Char('x'));
    assert!(app.assessment.alert().is_none());
    assert_eq!(app.assessment.form.name, "Kim");
    assert_eq!(app.key_context(), KeyContext::Form(Field::Smoker));
}

#[tokio::test]
async fn test_incomplete_form_stays_put_and_shows_error() {
    let backend = Arc::new(MockBackend::new().with_delay(Duration::ZERO));
    let mut app = App::new(Mode::Assessment, Locale::En, backend.clone());
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "Kim");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.assessment.screen(), Screen::Form);
    assert!(app.assessment.form_error().is_some());
    assert_eq!(backend.analyze_calls(), 0);

    // Editing clears the message.
    press(&mut app, KeyCode::Backspace);
    assert!(app.assessment.form_error().is_none());
}

#[tokio::test]
async fn test_dashboard_mode_loads_once_on_start() {
    let backend = Arc::new(MockBackend::new().with_delay(Duration::ZERO));
    let mut app = App::new(Mode::Dashboard, Locale::Ko, backend.clone());
    app.start();
    pump(&mut app, |a| a.dashboard.view().is_some()).await;

    assert!(app.dashboard.view().is_some());
    assert_eq!(backend.dashboard_calls(), 1);
    assert_eq!(
        app.log_entries.back().map(|e| e.message.as_str()),
        Some("Dashboard data loaded")
    );
}

#[tokio::test]
async fn test_dashboard_failure_is_logged_not_alerted() {
    let backend = Arc::new(MockBackend::new().failing("503").with_delay(Duration::ZERO));
    let mut app = App::new(Mode::Dashboard, Locale::En, backend);
    app.start();
    pump(&mut app, |a| {
        a.log_entries.iter().any(|e| e.level == LogLevel::Error)
    })
    .await;

    assert!(app.dashboard.view().is_none());
    assert!(app.assessment.alert().is_none());
    assert_eq!(app.key_context(), KeyContext::Dashboard);
}

#[test]
fn test_log_never_exceeds_cap() {
    let mut app = App::new(Mode::Assessment, Locale::En, Arc::new(MockBackend::new()));
    for i in 0..LOG_ENTRIES_CAP * 3 {
        app.log(LogLevel::Debug, &format!("entry {i}"), "");
    }
    assert_eq!(app.log_entries.len(), LOG_ENTRIES_CAP);
}

#[test]
fn test_q_quits_on_landing_but_types_on_form() {
    let mut app = App::new(Mode::Assessment, Locale::En, Arc::new(MockBackend::new()));
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit);
    assert_eq!(app.assessment.form.name, "q");

    let mut app = App::new(Mode::Assessment, Locale::En, Arc::new(MockBackend::new()));
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_help_overlay_closes_on_any_key() {
    let mut app = App::new(Mode::Dashboard, Locale::En, Arc::new(MockBackend::new()));
    apply_event(&mut app, InputEvent::Help);
    assert_eq!(app.key_context(), KeyContext::Help);
    press(&mut app, KeyCode::Char('z'));
    assert!(!app.show_help);
    assert!(!app.should_quit);
}
