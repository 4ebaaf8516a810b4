//! # Binary: health-report
//!
//! ## Responsibility
//! Terminal front end for the health-risk backend. Runs either the
//! self-assessment wizard or the statistics dashboard.
//!
//! ## Usage
//! ```bash
//! health-report                                  # assessment, default backend
//! health-report dashboard --backend-url http://10.0.0.5:5000
//! health-report --mock --locale en               # canned in-process backend
//! health-report --print-config-schema > schema.json
//! ```
//!
//! ## Environment Variables
//!
//! - `HEALTH_REPORT_URL`: backend base URL (overrides the config file)
//! - `HEALTH_REPORT_LOG`: log file; nothing is logged without one
//! - `RUST_LOG=info`: log level filter (default: info)
//!
//! ## Guarantees
//! - Terminal state always restored on exit, even on panic
//! - Clean shutdown on q, Esc, or Ctrl+C

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use crossterm::event;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use health_risk_report::config::{self, loader, ClientConfig};
use health_risk_report::tui::app::{App, Mode};
use health_risk_report::tui::events::{apply_event, poll_event};
use health_risk_report::tui::ui;
use health_risk_report::{
    init_tracing_to_file, HttpBackend, Locale, MockBackend, ReportBackend, ReportError,
};

#[derive(Parser)]
#[command(name = "health-report")]
#[command(about = "Health risk self-assessment and statistics dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL
    #[arg(long, global = true, env = "HEALTH_REPORT_URL")]
    backend_url: Option<String>,

    /// Display language
    #[arg(long, global = true, value_enum)]
    locale: Option<Locale>,

    /// Use the built-in canned backend instead of HTTP
    #[arg(long, global = true)]
    mock: bool,

    /// Log file
    #[arg(long, global = true, env = "HEALTH_REPORT_LOG")]
    log_file: Option<PathBuf>,

    /// Print the JSON Schema of the config file and exit
    #[arg(long)]
    print_config_schema: bool,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Fill in the health form and get a risk report (default)
    Assess,
    /// Show aggregate statistics of all stored assessments
    Dashboard,
}

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Loads the config file, if any, and applies command-line overrides.
fn resolve_config(cli: &Cli) -> Result<ClientConfig, config::ConfigError> {
    let mut config = match &cli.config {
        Some(path) => loader::load_from_file(path)?,
        None => ClientConfig::default(),
    };
    if let Some(url) = &cli.backend_url {
        config.backend.base_url = url.clone();
    }
    if let Some(locale) = cli.locale {
        config.ui.locale = locale;
    }
    if let Some(file) = &cli.log_file {
        config.logging.file = Some(file.clone());
    }
    loader::check(&config)?;
    Ok(config)
}

/// Sets up the terminal for TUI rendering.
fn setup_terminal() -> Result<Tui, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restores the terminal to its original state.
fn restore_terminal(terminal: &mut Tui) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.print_config_schema {
        println!("{}", config::schema_json()?);
        return Ok(());
    }

    let config = resolve_config(&cli).map_err(|e| ReportError::Config(e.to_string()))?;

    if let Some(path) = &config.logging.file {
        init_tracing_to_file(path)?;
    }

    let backend: Arc<dyn ReportBackend> = if cli.mock {
        Arc::new(MockBackend::new())
    } else {
        Arc::new(HttpBackend::from_config(&config.backend))
    };

    let mode = match cli.command.unwrap_or(Commands::Assess) {
        Commands::Assess => Mode::Assessment,
        Commands::Dashboard => Mode::Dashboard,
    };
    info!(
        ?mode,
        base_url = %config.backend.base_url,
        mock = cli.mock,
        "starting health-report"
    );

    // One worker runs the network tasks while this thread blocks on input.
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;
    let _guard = rt.enter();

    // Install panic hook that restores terminal before printing panic message
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, event::DisableMouseCapture);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let mut app = App::new(mode, config.ui.locale, backend).with_ui_config(&config.ui);
    app.start();

    let result = run(&mut terminal, &mut app, Duration::from_millis(config.ui.frame_ms));

    restore_terminal(&mut terminal)?;

    if let Err(e) = result {
        eprintln!("TUI error: {}", e);
        std::process::exit(1);
    }

    info!("health-report exited");
    Ok(())
}

/// Runs the event loop until the user quits.
fn run(terminal: &mut Tui, app: &mut App, frame: Duration) -> Result<(), io::Error> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;
        app.on_frame_rendered();

        let event = poll_event(frame, app.key_context());
        apply_event(app, event);

        if app.should_quit {
            break;
        }

        app.poll_tasks();
    }

    Ok(())
}
