use thiserror::Error;

/// Errors raised while building calendar inputs from untrusted data.
///
/// Rendering itself never fails; these only surface when parsing
/// configuration or constructing a focus date from raw numbers.
#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("Invalid month: {0}. Must be between 1 and 12")]
    InvalidMonth(u32),

    #[error("Date out of range: {year}-{month:02}")]
    OutOfRange { year: i32, month: u32 },

    #[error("Invalid month-day key '{0}', expected MM-DD")]
    InvalidMonthDay(String),

    #[error("Invalid calendar configuration: {0}")]
    Config(#[from] serde_json::Error),
}
