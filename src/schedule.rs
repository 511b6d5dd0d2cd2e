//! Schedule documents: a config, a viewport and the sessions to lay out.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::layout::{ExactHost, PlacedItem, TimetableLayout, Viewport};
use crate::types::SessionInfo;

/// Input document for a headless layout pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(default)]
    pub config: LayoutConfig,
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub sessions: Vec<SessionInfo>,
}

impl Schedule {
    /// Parse a schedule from JSON
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a schedule file
    ///
    /// # Errors
    /// Returns [`TimetableError::Io`](crate::error::TimetableError::Io) if the
    /// file cannot be read, or a JSON error if it is malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Result of laying out a [`Schedule`]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleLayout {
    pub total_vertical_extent: i32,
    pub total_horizontal_extent: i32,
    pub items: Vec<PlacedItem>,
}

/// Lay out every session of `schedule` with exactly-measured cards.
///
/// # Errors
/// Returns an error if the schedule's config is invalid.
pub fn layout_schedule(schedule: &Schedule) -> Result<ScheduleLayout> {
    let mut layout =
        TimetableLayout::new(schedule.config.clone())?.with_viewport(schedule.viewport);
    let mut host = ExactHost::new();
    let sessions = &schedule.sessions;
    layout.perform_layout(
        sessions.len(),
        |position| sessions.get(position).cloned().unwrap_or_default(),
        &mut host,
    );

    Ok(ScheduleLayout {
        total_vertical_extent: layout.total_vertical_extent(),
        total_horizontal_extent: layout.total_horizontal_extent(),
        items: layout.placed_items().collect(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::error::TimetableError;
    use crate::types::Rect;

    #[test]
    fn test_layout_schedule_from_json() {
        let schedule = Schedule::from_json(
            r#"{
                "config": {"columnWidth": 100, "pxPerMinute": 2, "columnCount": 3},
                "viewport": {"width": 300, "height": 400},
                "sessions": [
                    {"startEpochMin": 0, "endEpochMin": 30, "room": {"id": 0, "name": "A"}},
                    {"startEpochMin": 10, "endEpochMin": 40, "room": {"id": 1, "name": "B"}}
                ]
            }"#,
        )
        .unwrap();
        let result = layout_schedule(&schedule).unwrap();
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[1].rect, Rect::new(100, 20, 200, 80));
        assert_eq!(result.total_vertical_extent, 80);
        assert_eq!(result.total_horizontal_extent, 200);
    }

    #[test]
    fn test_layout_schedule_rejects_invalid_config() {
        let schedule = Schedule {
            config: LayoutConfig::new(100, 2, 0),
            ..Schedule::default()
        };
        let err = layout_schedule(&schedule).unwrap_err();
        assert!(matches!(err, TimetableError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_path_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("timetable-layout-missing-schedule.json");
        let err = Schedule::from_path(&path).unwrap_err();
        assert!(matches!(err, TimetableError::Io(_)));
    }

    #[test]
    fn test_from_path_reads_schedule() {
        let path = std::env::temp_dir().join(format!(
            "timetable-layout-schedule-{}.json",
            std::process::id()
        ));
        fs::write(
            &path,
            r#"{"sessions": [{"startEpochMin": 0, "endEpochMin": 15, "room": {"id": 0}}]}"#,
        )
        .unwrap();
        let schedule = Schedule::from_path(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(schedule.unwrap().sessions.len(), 1);
    }

    #[test]
    fn test_empty_schedule() {
        let result = layout_schedule(&Schedule::from_json("{}").unwrap()).unwrap();
        assert!(result.items.is_empty());
        assert_eq!(result.total_vertical_extent, 0);
    }
}
