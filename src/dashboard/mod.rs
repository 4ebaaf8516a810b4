//! # Module: Dashboard Flow
//!
//! ## Responsibility
//! Fetches the aggregate summary once and turns it into a [`DashboardView`].
//!
//! ## Guarantees
//! - Exactly one `GET /dashboard-data` per flow; no retry
//! - A failed fetch is logged and leaves the dashboard blank
//!
//! ## NOT Responsible For
//! - Aggregation (backend)
//! - Drawing (that belongs to `tui`)

pub mod view;

use std::sync::Arc;

use tokio::sync::oneshot;
use tracing::{error, info};

use crate::client::ReportBackend;
use crate::locale::Locale;
use crate::model::DashboardSummary;
use crate::ReportError;

pub use view::DashboardView;

/// Where the dashboard is in its single load.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    /// Nothing requested yet.
    Idle,
    /// Waiting for the backend.
    Loading,
    /// Summary received and rendered.
    Ready(Box<DashboardView>),
    /// The fetch failed; nothing is drawn.
    Unavailable,
}

/// Fetches the summary and logs the outcome.
pub async fn fetch_summary(backend: &dyn ReportBackend) -> Result<DashboardSummary, ReportError> {
    let outcome = backend.dashboard_data().await;
    match &outcome {
        Ok(summary) => info!(
            total_users = summary.total_users,
            brackets = summary.age_dist.labels.len(),
            "dashboard data received"
        ),
        Err(e) => error!(error = %e, "dashboard data request failed"),
    }
    outcome
}

/// State of the dashboard screen.
#[derive(Debug)]
pub struct DashboardFlow {
    state: DashboardState,
    locale: Locale,
    pending: Option<oneshot::Receiver<Result<DashboardSummary, ReportError>>>,
}

impl DashboardFlow {
    /// An idle dashboard.
    pub fn new(locale: Locale) -> Self {
        Self {
            state: DashboardState::Idle,
            locale,
            pending: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// The rendered view, once the summary has arrived.
    pub fn view(&self) -> Option<&DashboardView> {
        match &self.state {
            DashboardState::Ready(view) => Some(view),
            _ => None,
        }
    }

    /// Starts the one fetch on a spawned task.
    ///
    /// Ignored unless the flow is idle. Must be called inside a tokio
    /// runtime.
    pub fn load(&mut self, backend: Arc<dyn ReportBackend>) {
        if self.state != DashboardState::Idle {
            return;
        }
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let _ = tx.send(fetch_summary(backend.as_ref()).await);
        });
        self.pending = Some(rx);
        self.state = DashboardState::Loading;
    }

    /// Applies the fetch outcome if it has arrived.
    ///
    /// # Returns
    /// `Some` with the outcome when the fetch completed during this call,
    /// so the caller can surface a failure.
    pub fn poll(&mut self) -> Option<Result<(), ReportError>> {
        let rx = self.pending.as_mut()?;
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(oneshot::error::TryRecvError::Empty) => return None,
            Err(oneshot::error::TryRecvError::Closed) => Err(ReportError::Other(
                "dashboard task ended without a response".into(),
            )),
        };
        self.pending = None;
        Some(self.apply(outcome))
    }

    /// Waits for the fetch and applies its outcome.
    pub async fn settle(&mut self) -> Option<Result<(), ReportError>> {
        let rx = self.pending.take()?;
        let outcome = rx.await.unwrap_or_else(|_| {
            Err(ReportError::Other(
                "dashboard task ended without a response".into(),
            ))
        });
        Some(self.apply(outcome))
    }

    /// Renders a summary or records the failure.
    pub fn apply(
        &mut self,
        outcome: Result<DashboardSummary, ReportError>,
    ) -> Result<(), ReportError> {
        match outcome {
            Ok(summary) => {
                self.state =
                    DashboardState::Ready(Box::new(DashboardView::from_summary(&summary, self.locale)));
                Ok(())
            }
            Err(e) => {
                self.state = DashboardState::Unavailable;
                Err(e)
            }
        }
    }
}
