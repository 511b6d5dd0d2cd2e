//! Layout engine for placing session cards and clamping scroll.
//!
//! This module handles:
//! - Column and time-range to rectangle conversion
//! - Viewport bounds and the stored scroll origin
//! - The host interface that measures and places views

mod host;
mod timetable_layout;
mod viewport;

pub use host::{ExactHost, LayoutHost, MeasureSpec};
pub use timetable_layout::{PlacedItem, TimetableLayout};
pub use viewport::Viewport;
