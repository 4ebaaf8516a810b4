//! # Screen Controller
//!
//! ## Responsibility
//! Owns which of the four assessment screens is visible. The view state is a
//! single enum value; [`ScreenController::visibility`] is the only place that
//! maps it to per-screen visibility.
//!
//! ## Guarantees
//! - Exactly one screen is visible at any time
//! - Only the wizard's transitions are accepted; anything else is rejected
//!   without changing state

use thiserror::Error;
use tracing::debug;

/// One of the four wizard screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Welcome screen with the start control.
    Landing,
    /// Health metrics form.
    Form,
    /// Shown while the backend scores the submission.
    Loading,
    /// Rendered assessment.
    Result,
}

impl Screen {
    /// Every managed screen, in wizard order.
    pub const ALL: [Screen; 4] = [Screen::Landing, Screen::Form, Screen::Loading, Screen::Result];

    /// Stable identifier, matching the template ids of the web front end.
    pub fn id(self) -> &'static str {
        match self {
            Self::Landing => "main-screen",
            Self::Form => "form-screen",
            Self::Loading => "loading-screen",
            Self::Result => "result-screen",
        }
    }

    /// Whether the wizard permits moving from `self` to `to`.
    ///
    /// Staying on the same screen is always permitted.
    pub fn can_transition_to(self, to: Screen) -> bool {
        matches!(
            (self, to),
            (Self::Landing, Self::Form)
                | (Self::Form, Self::Loading)
                | (Self::Loading, Self::Result)
                | (Self::Loading, Self::Form)
                | (Self::Result, Self::Landing)
        ) || self == to
    }
}

/// Rejected screen change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScreenError {
    /// The wizard has no edge from `from` to `to`.
    #[error("screen transition {from:?} -> {to:?} is not permitted")]
    InvalidTransition {
        /// Screen visible when the change was requested.
        from: Screen,
        /// Requested screen.
        to: Screen,
    },
}

/// Enforces mutual exclusivity of the assessment screens.
#[derive(Debug, Clone)]
pub struct ScreenController {
    current: Screen,
}

impl ScreenController {
    /// Starts on [`Screen::Landing`].
    pub fn new() -> Self {
        Self {
            current: Screen::Landing,
        }
    }

    /// The visible screen.
    pub fn current(&self) -> Screen {
        self.current
    }

    /// Hides every screen, then shows `target`.
    ///
    /// # Errors
    /// [`ScreenError::InvalidTransition`] if the wizard has no such edge;
    /// the visible screen is unchanged.
    pub fn show(&mut self, target: Screen) -> Result<(), ScreenError> {
        if !self.current.can_transition_to(target) {
            return Err(ScreenError::InvalidTransition {
                from: self.current,
                to: target,
            });
        }
        if self.current != target {
            debug!(from = self.current.id(), to = target.id(), "show screen");
        }
        self.current = target;
        Ok(())
    }

    /// Visibility of every managed screen.
    pub fn visibility(&self) -> [(Screen, bool); 4] {
        Screen::ALL.map(|screen| (screen, screen == self.current))
    }

    /// Whether `screen` is the visible one.
    pub fn is_visible(&self, screen: Screen) -> bool {
        self.current == screen
    }
}

impl Default for ScreenController {
    fn default() -> Self {
        Self::new()
    }
}
