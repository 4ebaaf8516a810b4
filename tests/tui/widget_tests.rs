//! Whole-frame rendering tests through Ratatui's `TestBackend`.
//!
//! English strings keep assertions on plain ASCII substrings.

use std::sync::Arc;

use health_risk_report::model::{
    AgeDistribution, AssessmentResult, DashboardSummary, RiskCorrelation, Scores,
    SmokerDistribution,
};
use health_risk_report::tui::app::{App, Mode};
use health_risk_report::tui::ui;
use health_risk_report::{Locale, MockBackend, ReportError};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn app(mode: Mode) -> App {
    App::new(mode, Locale::En, Arc::new(MockBackend::new()))
}

fn render(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal.draw(|f| ui::draw(f, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn kim_result() -> AssessmentResult {
    AssessmentResult {
        scores: Scores {
            metabolic: 72.0,
            hypertension: 55.0,
            diabetes: 30.0,
        },
        factors: vec!["High BMI".into()],
        recommendations: vec!["**Reduce** sugar intake".into()],
    }
}

fn on_loading(app: &mut App) {
    app.assessment.start().expect("form");
    let form = &mut app.assessment.form;
    form.name = "Kim".into();
    form.age = "45".into();
    form.bmi = "28.5".into();
    form.systolic_bp = "135".into();
    form.blood_sugar = "110".into();
    form.is_smoker = Some(true);
    app.assessment.begin_submission().expect("loading");
}

#[test]
fn test_landing_screen_renders_prompt() {
    let text = render(&app(Mode::Assessment), 100, 30);
    assert!(text.contains("Health Risk Self-Check"));
    assert!(text.contains("main-screen"));
    assert!(text.contains("[Enter] Start"));
    assert!(text.contains("LOG"));
}

#[test]
fn test_form_screen_renders_every_control() {
    let mut app = app(Mode::Assessment);
    app.assessment.start().expect("form");
    app.assessment.form.name = "Kim".into();
    let text = render(&app, 100, 30);
    for label in ["Name", "Age (years)", "BMI", "Systolic BP", "Fasting blood sugar", "Smoker"] {
        assert!(text.contains(label), "missing {label}");
    }
    assert!(text.contains("Kim_"));
    assert!(text.contains("( ) Yes  ( ) No"));
    assert!(text.contains("[ Analyze ]"));
}

#[test]
fn test_loading_screen_renders_message() {
    let mut app = app(Mode::Assessment);
    on_loading(&mut app);
    let text = render(&app, 100, 30);
    assert!(text.contains("Analyzing your health data..."));
}

#[test]
fn test_result_screen_renders_report() {
    let mut app = app(Mode::Assessment);
    on_loading(&mut app);
    app.assessment.complete("Kim", Ok(kim_result()));
    app.on_frame_rendered();

    let text = render(&app, 100, 30);
    assert!(text.contains("Analysis report for Kim"));
    assert!(text.contains("Danger"));
    assert!(text.contains("72.0 %"));
    assert!(text.contains("55.0 %"));
    assert!(text.contains("30.0 %"));
    assert!(text.contains("High BMI"));
    assert!(text.contains("Reduce sugar intake"));
    assert!(text.contains('\u{2588}'));
}

#[test]
fn test_result_without_factors_shows_fallback() {
    let mut app = app(Mode::Assessment);
    on_loading(&mut app);
    let mut result = kim_result();
    result.factors.clear();
    app.assessment.complete("Kim", Ok(result));
    let text = render(&app, 100, 30);
    assert!(text.contains("No particular risk factors"));
}

#[test]
fn test_failure_alert_drawn_over_form() {
    let mut app = app(Mode::Assessment);
    on_loading(&mut app);
    app.assessment
        .complete("Kim", Err(ReportError::Transport("refused".into())));
    let text = render(&app, 100, 30);
    assert!(text.contains("An error occurred during analysis."));
    assert!(text.contains("Press any key to close"));
}

#[test]
fn test_too_small_terminal_shows_guard() {
    let text = render(&app(Mode::Assessment), 60, 12);
    assert!(text.contains("Terminal too small"));
}

#[test]
fn test_help_overlay_lists_keys() {
    let mut app = app(Mode::Assessment);
    app.show_help = true;
    let text = render(&app, 100, 30);
    assert!(text.contains("Keybindings"));
    assert!(text.contains("Press any key to close"));
}

#[test]
fn test_dashboard_renders_cards_and_chart_titles() {
    let mut app = app(Mode::Dashboard);
    let summary = DashboardSummary {
        total_users: 15,
        avg_metabolic_score: 44.4,
        avg_age: 38.0,
        age_dist: AgeDistribution {
            labels: vec!["20s".into(), "30s".into()],
            data: vec![5.0, 10.0],
        },
        smoker_dist: SmokerDistribution {
            non_smokers: 9,
            smokers: 6,
        },
        risk_correlation: RiskCorrelation {
            bmi: vec![22.0, 30.5],
            metabolic_score: vec![20.0, 80.0],
        },
    };
    app.dashboard.apply(Ok(summary)).expect("rendered");

    let text = render(&app, 120, 34);
    assert!(text.contains("User Statistics Dashboard"));
    assert!(text.contains("15 people"));
    assert!(text.contains("44.4 points"));
    assert!(text.contains("38.0 years"));
    assert!(text.contains("Age distribution"));
    assert!(text.contains("20s"));
    assert!(text.contains("Non-smokers 9 (60%)"));
    assert!(text.contains("Smokers 6 (40%)"));
    assert!(text.contains("BMI vs. risk"));
}

#[test]
fn test_failed_dashboard_draws_empty_panels() {
    let mut app = app(Mode::Dashboard);
    let _ = app
        .dashboard
        .apply(Err(ReportError::Transport("down".into())));
    let text = render(&app, 120, 34);
    assert!(text.contains("Total users"));
    assert!(!text.contains("people"));
}
