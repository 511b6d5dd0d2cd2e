//! Timetable grid layout and scroll clamping.
//!
//! Every session card sits in the column of its room and spans vertically in
//! proportion to its duration. A layout pass rebuilds all state from scratch;
//! scrolling only moves a stored viewport origin and never touches the
//! content rectangles.

use serde::Serialize;

use super::host::{LayoutHost, MeasureSpec};
use super::viewport::Viewport;
use crate::config::LayoutConfig;
use crate::error::Result;
use crate::types::{Rect, SessionInfo, Size};

/// A laid-out session card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedItem {
    /// Adapter position of the session
    pub position: usize,
    /// Column (room id) the card occupies
    pub column: u32,
    /// Bounds of the card
    pub rect: Rect,
}

/// Layout engine for a grid of time-boxed session cards.
#[derive(Debug, Clone)]
pub struct TimetableLayout {
    config: LayoutConfig,
    viewport: Viewport,
    /// Sessions indexed by position, rebuilt every pass
    sessions: Vec<SessionInfo>,
    /// Content-space rectangles in position order
    items: Vec<PlacedItem>,
    /// `(min start, max end)` over all sessions, `None` when empty
    bounds: Option<(i32, i32)>,
    scroll_x: i32,
    scroll_y: i32,
}

impl TimetableLayout {
    /// Create an engine with an empty layout.
    ///
    /// # Errors
    /// Returns an error if the config fails [`LayoutConfig::validate`].
    pub fn new(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            viewport: Viewport::default(),
            sessions: Vec::new(),
            items: Vec::new(),
            bounds: None,
            scroll_x: 0,
            scroll_y: 0,
        })
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Resize the viewport, keeping its padding
    pub fn resize(&mut self, width: i32, height: i32) {
        self.viewport.resize(width, height);
    }

    /// Lay out `item_count` sessions supplied by `lookup`.
    ///
    /// The earliest start becomes pixel row 0, so coordinates do not depend
    /// on the absolute epoch. Each card is measured by `host` against
    /// `(column_width, duration_min * px_per_minute)` and placed at the
    /// measured size. The scroll offset returns to the origin.
    pub fn perform_layout<F, H>(&mut self, item_count: usize, mut lookup: F, host: &mut H)
    where
        F: FnMut(usize) -> SessionInfo,
        H: LayoutHost,
    {
        self.sessions.clear();
        self.items.clear();
        self.bounds = None;
        self.scroll_x = 0;
        self.scroll_y = 0;

        if item_count == 0 {
            tracing::debug!("timetable layout cleared: no items");
            return;
        }

        self.sessions.reserve(item_count);
        let mut start_epoch_min = i32::MAX;
        let mut end_epoch_min = i32::MIN;
        for position in 0..item_count {
            let session = lookup(position);
            start_epoch_min = start_epoch_min.min(session.start_epoch_min);
            end_epoch_min = end_epoch_min.max(session.end_epoch_min);
            self.sessions.push(session);
        }
        self.bounds = Some((start_epoch_min, end_epoch_min));

        let column_width = self.config.column_width;
        let px_per_minute = self.config.px_per_minute;
        self.items.reserve(item_count);
        for (position, session) in self.sessions.iter().enumerate() {
            let column = session.column();
            if column >= self.config.column_count {
                tracing::warn!(
                    position,
                    column,
                    column_count = self.config.column_count,
                    "session room is outside the configured columns"
                );
            }

            let mut view = host.view_for_position(position);
            let spec = MeasureSpec {
                target: Size::new(
                    column_width,
                    session.duration_min().saturating_mul(px_per_minute),
                ),
                insets: host.decoration_insets(&view),
            };
            let measured = host.measure(&mut view, spec);

            let left = i32::try_from(column)
                .unwrap_or(i32::MAX)
                .saturating_mul(column_width);
            let top = session
                .start_epoch_min
                .saturating_sub(start_epoch_min)
                .saturating_mul(px_per_minute);
            let rect = Rect::from_origin_size(left, top, measured);
            host.place(view, rect);
            self.items.push(PlacedItem {
                position,
                column,
                rect,
            });
        }

        tracing::debug!(
            item_count,
            start_epoch_min,
            end_epoch_min,
            "timetable layout complete"
        );
    }

    /// Scroll vertically by `dy` pixels (positive reveals later sessions).
    ///
    /// The bottom row is probed when scrolling down and the top row when
    /// scrolling up; a row is the last or first `column_count` cards in
    /// position order. The returned delta stops the probed edge exactly at
    /// the padded viewport edge. Content moves by the negated return value.
    pub fn scroll_vertically(&mut self, dy: i32) -> i32 {
        if dy == 0 {
            return 0;
        }

        let row_len = self.column_count();
        let amount = if dy > 0 {
            let skip = self.items.len().saturating_sub(row_len);
            let Some(bottom) = self
                .items
                .iter()
                .skip(skip)
                .map(|item| self.to_viewport(item.rect).bottom)
                .max()
            else {
                return 0;
            };
            let parent_bottom = self.viewport.parent_bottom();
            if bottom.saturating_sub(dy) < parent_bottom {
                bottom.saturating_sub(parent_bottom)
            } else {
                dy
            }
        } else {
            let Some(top) = self
                .items
                .iter()
                .take(row_len)
                .map(|item| self.to_viewport(item.rect).top)
                .min()
            else {
                return 0;
            };
            let parent_top = self.viewport.parent_top();
            if top.saturating_sub(dy) > parent_top {
                top.saturating_sub(parent_top)
            } else {
                dy
            }
        };

        self.scroll_y = self.scroll_y.saturating_add(amount);
        tracing::trace!(requested = dy, actual = amount, "scroll vertically");
        amount
    }

    /// Scroll horizontally by `dx` pixels (positive reveals later columns).
    ///
    /// Probes the first card in column 0 and the first card in the last
    /// column. Scrolling is a no-op when the probed card is missing.
    pub fn scroll_horizontally(&mut self, dx: i32) -> i32 {
        if dx == 0 {
            return 0;
        }

        let amount = if dx > 0 {
            let last_column = self.config.column_count.saturating_sub(1);
            let Some(right) = self.first_in_column(last_column).map(|r| r.right) else {
                return 0;
            };
            let parent_right = self.viewport.parent_right();
            if right.saturating_sub(dx) < parent_right {
                right.saturating_sub(parent_right)
            } else {
                dx
            }
        } else {
            let Some(left) = self.first_in_column(0).map(|r| r.left) else {
                return 0;
            };
            let parent_left = self.viewport.parent_left();
            if left.saturating_sub(dx) > parent_left {
                left.saturating_sub(parent_left)
            } else {
                dx
            }
        };

        self.scroll_x = self.scroll_x.saturating_add(amount);
        tracing::trace!(requested = dx, actual = amount, "scroll horizontally");
        amount
    }

    /// Full scrollable height: `(max end - min start) * px_per_minute`
    pub fn total_vertical_extent(&self) -> i32 {
        self.bounds.map_or(0, |(start, end)| {
            end.saturating_sub(start)
                .saturating_mul(self.config.px_per_minute)
        })
    }

    /// Right-most content edge over all cards
    pub fn total_horizontal_extent(&self) -> i32 {
        self.items
            .iter()
            .map(|item| item.rect.right)
            .max()
            .unwrap_or(0)
    }

    pub fn can_scroll_vertically(&self) -> bool {
        true
    }

    pub fn can_scroll_horizontally(&self) -> bool {
        true
    }

    /// Accumulated vertical scroll since the last layout pass
    pub fn vertical_scroll_offset(&self) -> i32 {
        self.scroll_y
    }

    /// Accumulated horizontal scroll since the last layout pass
    pub fn horizontal_scroll_offset(&self) -> i32 {
        self.scroll_x
    }

    /// Number of cards in the current layout
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Earliest session start, i.e. the epoch minute at content row 0
    pub fn origin_epoch_min(&self) -> Option<i32> {
        self.bounds.map(|(start, _)| start)
    }

    pub fn session(&self, position: usize) -> Option<&SessionInfo> {
        self.sessions.get(position)
    }

    /// Card at `position` in content coordinates
    pub fn content_rect(&self, position: usize) -> Option<Rect> {
        self.items.get(position).map(|item| item.rect)
    }

    /// Card at `position` in viewport coordinates
    pub fn placed_rect(&self, position: usize) -> Option<Rect> {
        self.items
            .get(position)
            .map(|item| self.to_viewport(item.rect))
    }

    /// All cards in position order, in viewport coordinates
    pub fn placed_items(&self) -> impl Iterator<Item = PlacedItem> + '_ {
        self.items.iter().map(|item| PlacedItem {
            rect: self.to_viewport(item.rect),
            ..*item
        })
    }

    /// Position of the first card containing the viewport point `(x, y)`
    pub fn item_at(&self, x: i32, y: i32) -> Option<usize> {
        self.placed_items()
            .find(|item| item.rect.contains(x, y))
            .map(|item| item.position)
    }

    fn to_viewport(&self, rect: Rect) -> Rect {
        rect.offset(self.scroll_x.saturating_neg(), self.scroll_y.saturating_neg())
    }

    fn first_in_column(&self, column: u32) -> Option<Rect> {
        self.items
            .iter()
            .find(|item| item.column == column)
            .map(|item| self.to_viewport(item.rect))
    }

    fn column_count(&self) -> usize {
        usize::try_from(self.config.column_count).unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::layout::ExactHost;
    use crate::types::Room;

    fn session(column: u32, start: i32, end: i32) -> SessionInfo {
        SessionInfo::new(start, end, Room::new(column, ""))
    }

    fn layout_of(config: LayoutConfig, sessions: &[SessionInfo]) -> TimetableLayout {
        let mut layout = TimetableLayout::new(config).unwrap();
        let mut host = ExactHost::new();
        layout.perform_layout(sessions.len(), |p| sessions[p].clone(), &mut host);
        layout
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(TimetableLayout::new(LayoutConfig::new(100, 0, 3)).is_err());
    }

    #[test]
    fn test_origin_normalized_to_earliest_start() {
        let base = 25_825_560;
        let layout = layout_of(
            LayoutConfig::new(100, 2, 3),
            &[session(0, base + 30, base + 60), session(1, base, base + 15)],
        );
        assert_eq!(layout.origin_epoch_min(), Some(base));
        assert_eq!(layout.content_rect(0), Some(Rect::new(0, 60, 100, 120)));
        assert_eq!(layout.content_rect(1), Some(Rect::new(100, 0, 200, 30)));
        assert_eq!(layout.total_vertical_extent(), 120);
    }

    #[test]
    fn test_relayout_replaces_previous_state() {
        let mut layout = layout_of(
            LayoutConfig::new(100, 1, 3),
            &[session(0, 0, 10), session(1, 0, 10), session(2, 0, 10)],
        );
        layout.set_viewport(Viewport::new(150, 5));
        assert_eq!(layout.scroll_vertically(3), 3);

        let next = [session(2, 50, 70)];
        let mut host = ExactHost::new();
        layout.perform_layout(1, |p| next[p].clone(), &mut host);
        assert_eq!(layout.item_count(), 1);
        assert_eq!(layout.vertical_scroll_offset(), 0);
        assert_eq!(layout.session(0), Some(&next[0]));
        assert_eq!(layout.session(1), None);
        assert_eq!(layout.placed_rect(0), Some(Rect::new(200, 0, 300, 20)));
    }

    #[test]
    fn test_room_outside_columns_still_placed() {
        let layout = layout_of(LayoutConfig::new(50, 1, 2), &[session(4, 0, 10)]);
        assert_eq!(layout.content_rect(0), Some(Rect::new(200, 0, 250, 10)));
        assert_eq!(layout.total_horizontal_extent(), 250);
    }

    #[test]
    fn test_scroll_offsets_accumulate() {
        let mut layout = layout_of(
            LayoutConfig::new(100, 10, 2),
            &[session(0, 0, 60), session(1, 0, 60)],
        )
        .with_viewport(Viewport::new(100, 200));
        assert_eq!(layout.scroll_vertically(150), 150);
        assert_eq!(layout.scroll_vertically(150), 150);
        assert_eq!(layout.scroll_vertically(150), 100);
        assert_eq!(layout.vertical_scroll_offset(), 400);
        assert_eq!(layout.scroll_horizontally(30), 30);
        assert_eq!(layout.horizontal_scroll_offset(), 30);
        assert_eq!(layout.placed_rect(1), Some(Rect::new(70, -400, 170, 200)));
    }

    #[test]
    fn test_item_at_uses_viewport_coordinates() {
        let mut layout = layout_of(
            LayoutConfig::new(100, 1, 2),
            &[session(0, 0, 100), session(1, 0, 300)],
        )
        .with_viewport(Viewport::new(200, 200));
        assert_eq!(layout.item_at(50, 50), Some(0));
        assert_eq!(layout.item_at(250, 50), None);
        assert_eq!(layout.scroll_vertically(100), 100);
        assert_eq!(layout.item_at(150, 150), Some(1));
        assert_eq!(layout.item_at(50, 50), None);
    }
}
