use serde::{Deserialize, Serialize};

use crate::error::{Result, TimetableError};

const MILLIS_PER_MINUTE: i64 = 60 * 1000;

/// A room track. Its `id` is the column the room's sessions occupy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl Room {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Minute-resolution geometry of one session card.
///
/// No validation happens here: an inverted range yields a negative
/// [`duration_min`](Self::duration_min) and, downstream, a negative height.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    /// Start time in minutes since the epoch
    pub start_epoch_min: i32,
    /// End time in minutes since the epoch
    pub end_epoch_min: i32,
    pub room: Room,
}

impl SessionInfo {
    pub fn new(start_epoch_min: i32, end_epoch_min: i32, room: Room) -> Self {
        Self {
            start_epoch_min,
            end_epoch_min,
            room,
        }
    }

    /// Build from Unix timestamps in milliseconds, truncating to whole minutes.
    ///
    /// # Errors
    /// Returns [`TimetableError::EpochOutOfRange`] if either minute value
    /// does not fit in `i32`.
    pub fn from_unix_millis(start_ms: i64, end_ms: i64, room: Room) -> Result<Self> {
        Ok(Self::new(
            epoch_minutes(start_ms)?,
            epoch_minutes(end_ms)?,
            room,
        ))
    }

    /// `end_epoch_min - start_epoch_min`
    pub fn duration_min(&self) -> i32 {
        self.end_epoch_min.saturating_sub(self.start_epoch_min)
    }

    /// Column index of the card, taken from the room id.
    pub fn column(&self) -> u32 {
        self.room.id
    }
}

fn epoch_minutes(ms: i64) -> Result<i32> {
    i32::try_from(ms / MILLIS_PER_MINUTE).map_err(|_| TimetableError::EpochOutOfRange(ms))
}
