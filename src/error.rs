//! Structured error types for timetable-layout.
//!
//! Geometry operations are total and never fail; these errors cover the
//! edges of the crate: configuration, epoch conversion and schedule I/O.

/// All errors that can occur while configuring or loading a timetable.
#[derive(Debug, thiserror::Error)]
pub enum TimetableError {
    /// Layout configuration violates a well-formedness rule.
    #[error("Invalid layout config: {0}")]
    InvalidConfig(String),

    /// A timestamp does not fit the minute range used for layout math.
    #[error("Epoch value out of range: {0} ms")]
    EpochOutOfRange(i64),

    /// Schedule document (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TimetableError>;

impl From<TimetableError> for wasm_bindgen::JsValue {
    fn from(e: TimetableError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
