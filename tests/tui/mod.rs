//! Integration tests for the terminal front end.
//!
//! These tests verify cross-module interactions: key presses driving the
//! assessment wizard through spawned requests, the dashboard load, log
//! bounds, and whole-frame rendering through Ratatui's `TestBackend`.

#[cfg(feature = "tui")]
mod app_state;
#[cfg(feature = "tui")]
mod widget_tests;
