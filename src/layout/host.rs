//! Host capability interface for view measurement and placement.
//!
//! The layout engine never owns views. The embedding toolkit hands out an
//! opaque view per position, measures it against an exact target box and
//! receives the final rectangle back.

use crate::types::{Insets, Rect, Size};

/// Exact box a view is asked to fill, plus the insets that surround it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureSpec {
    /// Content box: `(column_width, duration_min * px_per_minute)`
    pub target: Size,
    /// Margins and item decorations around the content box
    pub insets: Insets,
}

impl MeasureSpec {
    /// Target grown by the insets
    pub fn decorated(&self) -> Size {
        Size::new(
            self.target.width.saturating_add(self.insets.horizontal()),
            self.target.height.saturating_add(self.insets.vertical()),
        )
    }
}

/// Capabilities the embedding toolkit supplies to a layout pass.
pub trait LayoutHost {
    /// Opaque view handle
    type View;

    /// Obtain (create or recycle) the view for an adapter position
    fn view_for_position(&mut self, position: usize) -> Self::View;

    /// Margins plus item decorations for a view
    fn decoration_insets(&self, _view: &Self::View) -> Insets {
        Insets::default()
    }

    /// Measure a view against an exact spec, returning its decorated size
    fn measure(&mut self, view: &mut Self::View, spec: MeasureSpec) -> Size;

    /// Place a measured view at its final rectangle
    fn place(&mut self, view: Self::View, rect: Rect);
}

/// Headless host: views are positions, every view measures to exactly its
/// decorated target and placements are recorded in order.
#[derive(Debug, Clone, Default)]
pub struct ExactHost {
    insets: Insets,
    placed: Vec<(usize, Rect)>,
}

impl ExactHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host whose views all carry the same decoration insets
    pub fn with_insets(insets: Insets) -> Self {
        Self {
            insets,
            placed: Vec::new(),
        }
    }

    /// Placements in the order the engine emitted them
    pub fn placed(&self) -> &[(usize, Rect)] {
        &self.placed
    }
}

impl LayoutHost for ExactHost {
    type View = usize;

    fn view_for_position(&mut self, position: usize) -> usize {
        position
    }

    fn decoration_insets(&self, _view: &usize) -> Insets {
        self.insets
    }

    fn measure(&mut self, _view: &mut usize, spec: MeasureSpec) -> Size {
        spec.decorated()
    }

    fn place(&mut self, view: usize, rect: Rect) {
        self.placed.push((view, rect));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorated_adds_insets() {
        let spec = MeasureSpec {
            target: Size::new(100, 60),
            insets: Insets::new(2, 4, 2, 4),
        };
        assert_eq!(spec.decorated(), Size::new(104, 68));
    }

    #[test]
    fn test_exact_host_records_placements() {
        let mut host = ExactHost::with_insets(Insets::uniform(1));
        let mut view = host.view_for_position(3);
        let insets = host.decoration_insets(&view);
        let size = host.measure(
            &mut view,
            MeasureSpec {
                target: Size::new(10, 20),
                insets,
            },
        );
        assert_eq!(size, Size::new(12, 22));
        host.place(view, Rect::new(0, 0, 12, 22));
        assert_eq!(host.placed(), &[(3, Rect::new(0, 0, 12, 22))]);
    }
}
