//! Data types for timetable layout.

mod geometry;
mod session;

pub use geometry::*;
pub use session::*;
