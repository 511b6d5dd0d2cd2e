//! Viewport bounds used to clamp scrolling.

use serde::{Deserialize, Serialize};

use crate::types::Insets;

/// Viewport state - the visible window onto the timetable grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Viewport {
    /// Viewport width in pixels
    pub width: i32,
    /// Viewport height in pixels
    pub height: i32,
    /// Padding between the viewport edge and the scrollable content
    pub padding: Insets,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl Viewport {
    /// Create a viewport with no padding
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            padding: Insets::default(),
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }

    pub fn parent_left(&self) -> i32 {
        self.padding.left
    }

    pub fn parent_top(&self) -> i32 {
        self.padding.top
    }

    pub fn parent_right(&self) -> i32 {
        self.width.saturating_sub(self.padding.right)
    }

    pub fn parent_bottom(&self) -> i32 {
        self.height.saturating_sub(self.padding.bottom)
    }
}
