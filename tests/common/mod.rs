//! Shared helpers for timetable layout integration tests.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use std::collections::HashMap;

use timetable_layout::{
    Insets, LayoutConfig, LayoutHost, MeasureSpec, Rect, Room, SessionInfo, Size,
    TimetableLayout, Viewport,
};

/// Session in `column` from `start` to `end` epoch minutes.
pub fn session(column: u32, start: i32, end: i32) -> SessionInfo {
    SessionInfo::new(start, end, Room::new(column, format!("Room {column}")))
}

/// Host that measures exactly and records every measure and place call.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub insets: HashMap<usize, Insets>,
    pub requested: Vec<usize>,
    pub specs: Vec<(usize, MeasureSpec)>,
    pub placed: Vec<(usize, Rect)>,
}

impl RecordingHost {
    pub fn with_insets(insets: impl IntoIterator<Item = (usize, Insets)>) -> Self {
        Self {
            insets: insets.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl LayoutHost for RecordingHost {
    type View = usize;

    fn view_for_position(&mut self, position: usize) -> usize {
        self.requested.push(position);
        position
    }

    fn decoration_insets(&self, view: &usize) -> Insets {
        self.insets.get(view).copied().unwrap_or_default()
    }

    fn measure(&mut self, view: &mut usize, spec: MeasureSpec) -> Size {
        self.specs.push((*view, spec));
        spec.decorated()
    }

    fn place(&mut self, view: usize, rect: Rect) {
        self.placed.push((view, rect));
    }
}

/// Lay out `sessions` and return the engine plus the host that saw the pass.
pub fn laid_out(
    config: LayoutConfig,
    viewport: Viewport,
    sessions: &[SessionInfo],
) -> (TimetableLayout, RecordingHost) {
    let mut layout = TimetableLayout::new(config)
        .expect("valid config")
        .with_viewport(viewport);
    let mut host = RecordingHost::default();
    layout.perform_layout(sessions.len(), |p| sessions[p].clone(), &mut host);
    (layout, host)
}

/// Viewport-space rectangles in position order.
pub fn placed_rects(layout: &TimetableLayout) -> Vec<Rect> {
    layout.placed_items().map(|item| item.rect).collect()
}
