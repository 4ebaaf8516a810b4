//! # Module: TUI Widgets
//!
//! ## Responsibility
//! Individual rendering widgets for each screen. Each widget is a pure
//! function that takes app state and a layout rect, and renders into a frame.
//!
//! ## Guarantees
//! - All widgets handle zero-data gracefully (empty state rendering)
//! - No widget panics on any input range
//! - Tier colours are consistent across gauges, banner and charts

pub mod alert;
pub mod dashboard;
pub mod form;
pub mod gauge;
pub mod landing;
pub mod loading;
pub mod log;
pub mod result;
