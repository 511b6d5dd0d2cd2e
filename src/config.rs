//! Layout configuration.
//!
//! The constants every layout pass depends on: column width, vertical scale
//! and the number of room columns.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimetableError};

/// Default number of room columns
pub const DEFAULT_COLUMN_COUNT: u32 = 9;

/// Default column width in pixels
pub const DEFAULT_COLUMN_WIDTH: i32 = 240;

/// Default vertical scale in pixels per minute
pub const DEFAULT_PX_PER_MINUTE: i32 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Width of every column in pixels
    pub column_width: i32,
    /// Vertical pixels per minute of session duration
    pub px_per_minute: i32,
    /// Number of room columns
    pub column_count: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            column_width: DEFAULT_COLUMN_WIDTH,
            px_per_minute: DEFAULT_PX_PER_MINUTE,
            column_count: DEFAULT_COLUMN_COUNT,
        }
    }
}

impl LayoutConfig {
    pub fn new(column_width: i32, px_per_minute: i32, column_count: u32) -> Self {
        Self {
            column_width,
            px_per_minute,
            column_count,
        }
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or the config is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the config can drive a layout pass.
    ///
    /// # Errors
    /// Returns [`TimetableError::InvalidConfig`] when `column_count` or
    /// `px_per_minute` is not positive, or `column_width` is negative.
    pub fn validate(&self) -> Result<()> {
        if self.column_count == 0 {
            return Err(TimetableError::InvalidConfig(
                "columnCount must be greater than 0".to_string(),
            ));
        }
        if self.px_per_minute <= 0 {
            return Err(TimetableError::InvalidConfig(format!(
                "pxPerMinute must be greater than 0, got {}",
                self.px_per_minute
            )));
        }
        if self.column_width < 0 {
            return Err(TimetableError::InvalidConfig(format!(
                "columnWidth must not be negative, got {}",
                self.column_width
            )));
        }
        if i32::try_from(self.column_count).is_err() {
            return Err(TimetableError::InvalidConfig(format!(
                "columnCount {} is too large",
                self.column_count
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_nine_columns() {
        let config = LayoutConfig::default();
        assert_eq!(config.column_count, 9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = LayoutConfig::from_json(r#"{"columnWidth": 100, "pxPerMinute": 2}"#).unwrap();
        assert_eq!(config, LayoutConfig::new(100, 2, DEFAULT_COLUMN_COUNT));
    }

    #[test]
    fn test_zero_column_width_is_valid() {
        assert!(LayoutConfig::new(0, 1, 1).validate().is_ok());
    }

    #[test]
    fn test_rejects_malformed_config() {
        for config in [
            LayoutConfig::new(100, 2, 0),
            LayoutConfig::new(100, 0, 3),
            LayoutConfig::new(-1, 2, 3),
            LayoutConfig::new(100, 2, u32::MAX),
        ] {
            let err = config.validate().unwrap_err();
            assert!(matches!(err, TimetableError::InvalidConfig(_)), "{config:?}");
        }
    }

    #[test]
    fn test_from_json_rejects_bad_json() {
        let err = LayoutConfig::from_json("{columnWidth").unwrap_err();
        assert!(matches!(err, TimetableError::Json(_)));
    }
}
