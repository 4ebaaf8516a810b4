//! # Module: Terminal Front End
//!
//! ## Responsibility
//! Renders both flows in the terminal with Ratatui: the assessment wizard
//! (landing, form, loading, result) and the statistics dashboard, plus a
//! diagnostic log tail and a help overlay.
//!
//! ## Guarantees
//! - No panics in any rendering or update path
//! - Clean terminal restore on exit, including on panic (see the binary)
//! - Graceful resize handling down to the configured minimum size
//!
//! ## NOT Responsible For
//! - Network calls (delegated to the flows, which spawn tasks)
//! - Display strings (see `locale`)

pub mod app;
pub mod events;
pub mod ui;
pub mod widgets;
