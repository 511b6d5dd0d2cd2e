//! timetable-layout - session timetable grid layout
//!
//! Positions and scrolls a grid of time-boxed session cards:
//! - One fixed-width column per room
//! - Card height proportional to session duration
//! - Vertical origin normalized to the earliest session
//! - Scroll deltas clamped so content never scrolls past its edges
//!
//! # Usage
//!
//! ```
//! use timetable_layout::{ExactHost, LayoutConfig, Room, SessionInfo, TimetableLayout};
//!
//! let sessions = vec![
//!     SessionInfo::new(0, 30, Room::new(0, "Hall A")),
//!     SessionInfo::new(10, 40, Room::new(1, "Hall B")),
//! ];
//! let mut layout = TimetableLayout::new(LayoutConfig::new(100, 2, 2))?;
//! let mut host = ExactHost::new();
//! layout.perform_layout(sessions.len(), |p| sessions[p].clone(), &mut host);
//! assert_eq!(layout.total_vertical_extent(), 80);
//! # Ok::<(), timetable_layout::TimetableError>(())
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod schedule;
pub mod types;

use wasm_bindgen::prelude::*;

pub use config::LayoutConfig;
pub use error::{Result, TimetableError};
pub use layout::{ExactHost, LayoutHost, MeasureSpec, PlacedItem, TimetableLayout, Viewport};
pub use schedule::{layout_schedule, Schedule, ScheduleLayout};
pub use types::*;

/// Lay out a JSON schedule and return the placed cards as a JSON string
///
/// # Errors
/// Returns an error if the schedule is malformed or its config is invalid.
#[wasm_bindgen]
pub fn layout_schedule_json(json: &str) -> std::result::Result<String, JsValue> {
    let schedule = Schedule::from_json(json)?;
    let result = layout_schedule(&schedule)?;

    Ok(serde_json::to_string(&result).map_err(TimetableError::from)?)
}

/// Lay out a JSON schedule and return the result as a `JsValue`
///
/// # Errors
/// Returns an error if the schedule is malformed or its config is invalid.
#[wasm_bindgen]
pub fn layout_schedule_to_js(json: &str) -> std::result::Result<JsValue, JsValue> {
    let schedule = Schedule::from_json(json)?;
    let result = layout_schedule(&schedule)?;

    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
