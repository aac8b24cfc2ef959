//! Error types for daterange

use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for daterange
#[derive(Debug, Error)]
pub enum DaterangeError {
    #[error("Unparseable date: '{0}' does not match any known formats")]
    UnparseableDate(String),

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    #[error("Invalid interval {interval}: cannot step from {start} to {end}")]
    InvalidInterval {
        interval: i64,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("Invalid date format: '{0}'")]
    InvalidFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DaterangeError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DaterangeError::UnparseableDate(_) | DaterangeError::DateOutOfRange(_) => 3,
            DaterangeError::InvalidInterval { .. } => 4,
            DaterangeError::InvalidFormat(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DaterangeError::UnparseableDate(token) => {
                format!(
                    "Unparseable date: '{}'\n\n\
                    Accepted dates:\n\
                    • today, yesterday\n\
                    • Ndaysago or 1dayago (e.g., 3daysago)\n\
                    • The --format pattern (default %Y/%m/%d)\n\
                    • YYYY-MM-DD, YYYY/MM/DD, YYYYMMDD\n\n\
                    Examples:\n\
                    daterange --start 2024-01-01 --end 2024-01-31\n\
                    daterange --start 7daysago --count 7 --interval 1",
                    token
                )
            }
            DaterangeError::InvalidInterval {
                interval,
                start,
                end,
            } => {
                format!(
                    "Invalid interval {} for a range from {} to {}\n\n\
                    Suggestions:\n\
                    • Use a nonzero --interval when --end differs from --start\n\
                    • Drop --end and use --count to repeat a date",
                    interval, start, end
                )
            }
            DaterangeError::InvalidFormat(pattern) => {
                format!(
                    "Invalid date format: '{}'\n\n\
                    The format must be a strftime pattern that describes a calendar date.\n\
                    Example: daterange --format '%Y-%m-%d'",
                    pattern
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DaterangeError
pub type Result<T> = std::result::Result<T, DaterangeError>;
