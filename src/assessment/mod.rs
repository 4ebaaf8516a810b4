//! # Module: Assessment Flow
//!
//! ## Responsibility
//! Drives the four-screen wizard for one submission at a time: form entry,
//! one `POST /analyze` request, rendering of the response, and the single
//! failure path back to the form.
//!
//! ## Guarantees
//! - At most one request is in flight; submits are only accepted on the form
//! - Failure raises exactly one blocking alert and keeps every entered value
//! - The result screen is shown only after the whole result view is rendered
//! - No retries and no partial results
//!
//! ## NOT Responsible For
//! - Scoring (backend)
//! - Terminal input and drawing (that belongs to `tui`)

pub mod form;
pub mod render;
pub mod screen;

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::oneshot;
use tracing::{error, info};

use crate::client::ReportBackend;
use crate::locale::Locale;
use crate::model::{AssessmentResult, UserSubmission};
use crate::ReportError;

use form::{FormError, FormState};
use render::ResultView;
use screen::{Screen, ScreenController, ScreenError};

/// Why a submit was not sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The form is incomplete or holds a non-number.
    #[error("form is not ready: {0}")]
    Invalid(#[from] FormError),
    /// The wizard is not on the form screen.
    #[error(transparent)]
    Screen(#[from] ScreenError),
}

/// Outcome of one backend call, delivered when the task completes.
pub type Completion = Result<AssessmentResult, ReportError>;

/// A request task the flow is waiting on.
#[derive(Debug)]
struct InFlight {
    name: String,
    done: oneshot::Receiver<Completion>,
}

/// Sends `submission` to the backend and logs the outcome.
///
/// This is the whole network side of a submit; [`AssessmentFlow::submit`]
/// runs it as a spawned task.
pub async fn run_submission(backend: &dyn ReportBackend, submission: &UserSubmission) -> Completion {
    info!(name = %submission.name, is_smoker = submission.is_smoker, "submitting assessment");
    let outcome = backend.analyze(submission).await;
    match &outcome {
        Ok(result) => info!(
            metabolic = result.scores.metabolic,
            factors = result.factors.len(),
            "assessment received"
        ),
        Err(e) => error!(error = %e, "assessment request failed"),
    }
    outcome
}

/// State of the assessment wizard.
#[derive(Debug)]
pub struct AssessmentFlow {
    screens: ScreenController,
    /// Form controls.
    pub form: FormState,
    /// Result screen view model.
    pub result: ResultView,
    form_error: Option<FormError>,
    alert: Option<String>,
    alerts_raised: u64,
    last_failure: Option<String>,
    locale: Locale,
    in_flight: Option<InFlight>,
}

impl AssessmentFlow {
    /// A fresh wizard on the landing screen.
    pub fn new(locale: Locale) -> Self {
        Self {
            screens: ScreenController::new(),
            form: FormState::new(),
            result: ResultView::new(),
            form_error: None,
            alert: None,
            alerts_raised: 0,
            last_failure: None,
            locale,
            in_flight: None,
        }
    }

    /// The visible screen.
    pub fn screen(&self) -> Screen {
        self.screens.current()
    }

    /// Visibility of every screen; exactly one entry is `true`.
    pub fn visibility(&self) -> [(Screen, bool); 4] {
        self.screens.visibility()
    }

    /// Display language.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Landing → Form.
    pub fn start(&mut self) -> Result<(), ScreenError> {
        self.screens.show(Screen::Form)
    }

    /// Result → Landing, clearing the form.
    pub fn restart(&mut self) -> Result<(), ScreenError> {
        self.screens.show(Screen::Landing)?;
        self.form.reset();
        self.form_error = None;
        Ok(())
    }

    /// Validation message from the last rejected submit.
    pub fn form_error(&self) -> Option<&FormError> {
        self.form_error.as_ref()
    }

    /// Clears the validation message, e.g. after the user edits the form.
    pub fn clear_form_error(&mut self) {
        self.form_error = None;
    }

    /// The blocking alert, if one is open.
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Closes the alert.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// How many alerts this flow has raised.
    pub fn alerts_raised(&self) -> u64 {
        self.alerts_raised
    }

    /// Cause of the most recent failed request.
    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    /// Whether a request is outstanding.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Validates the form and moves to the loading screen.
    ///
    /// # Errors
    /// [`SubmitError::Screen`] unless the form screen is visible;
    /// [`SubmitError::Invalid`] if the form is incomplete. The screen does
    /// not change in either case.
    pub fn begin_submission(&mut self) -> Result<UserSubmission, SubmitError> {
        if self.screen() != Screen::Form {
            return Err(ScreenError::InvalidTransition {
                from: self.screen(),
                to: Screen::Loading,
            }
            .into());
        }
        let submission = match self.form.to_submission() {
            Ok(s) => s,
            Err(e) => {
                self.form_error = Some(e.clone());
                return Err(e.into());
            }
        };
        self.form_error = None;
        self.screens.show(Screen::Loading)?;
        Ok(submission)
    }

    /// Validates, moves to loading and sends the request on a spawned task.
    ///
    /// Must be called inside a tokio runtime. Poll with [`poll`](Self::poll)
    /// or await with [`settle`](Self::settle).
    pub fn submit(&mut self, backend: Arc<dyn ReportBackend>) -> Result<(), SubmitError> {
        let submission = self.begin_submission()?;
        let (tx, rx) = oneshot::channel();
        let name = submission.name.clone();
        tokio::spawn(async move {
            let outcome = run_submission(backend.as_ref(), &submission).await;
            // The flow may have been dropped; nothing to deliver to then.
            let _ = tx.send(outcome);
        });
        self.in_flight = Some(InFlight { name, done: rx });
        Ok(())
    }

    /// Applies the request outcome if it has arrived.
    ///
    /// # Returns
    /// `true` if the request completed during this call.
    pub fn poll(&mut self) -> bool {
        let Some(in_flight) = self.in_flight.as_mut() else {
            return false;
        };
        let outcome = match in_flight.done.try_recv() {
            Ok(outcome) => outcome,
            Err(oneshot::error::TryRecvError::Empty) => return false,
            Err(oneshot::error::TryRecvError::Closed) => Err(ReportError::Other(
                "assessment task ended without a response".into(),
            )),
        };
        if let Some(in_flight) = self.in_flight.take() {
            self.complete(&in_flight.name, outcome);
        }
        true
    }

    /// Waits for the outstanding request and applies its outcome.
    pub async fn settle(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            let outcome = in_flight.done.await.unwrap_or_else(|_| {
                Err(ReportError::Other(
                    "assessment task ended without a response".into(),
                ))
            });
            self.complete(&in_flight.name, outcome);
        }
    }

    /// Applies a request outcome received while on the loading screen.
    ///
    /// Success renders the whole result view, then shows Result. Failure
    /// raises the alert and shows Form with every value kept.
    pub fn complete(&mut self, name: &str, outcome: Completion) {
        if self.screen() != Screen::Loading {
            return;
        }
        match outcome {
            Ok(result) => {
                self.result.render(&result, name, self.locale);
                if let Err(e) = self.screens.show(Screen::Result) {
                    error!(error = %e, "cannot show result screen");
                }
            }
            Err(e) => {
                self.last_failure = Some(e.to_string());
                self.alert = Some(self.locale.strings().analysis_failed.to_string());
                self.alerts_raised += 1;
                if let Err(e) = self.screens.show(Screen::Form) {
                    error!(error = %e, "cannot return to form screen");
                }
            }
        }
    }

    /// Applies deferred visual changes after a frame has been drawn.
    pub fn on_frame_rendered(&mut self) -> bool {
        self.result.on_frame_rendered()
    }
}
