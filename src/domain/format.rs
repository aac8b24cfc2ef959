//! strftime patterns for rendering and parsing calendar dates

use crate::error::{DaterangeError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveTime};
use std::fmt::Write;

/// Pattern used when neither the command line nor the defaults file sets one
pub const DEFAULT_FORMAT: &str = "%Y/%m/%d";

/// A strftime pattern known to render a calendar date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: String,
}

impl DateFormat {
    /// Validate a pattern.
    ///
    /// Rejects unknown specifiers and specifiers that need more than a
    /// date at midnight to render (such as `%z`).
    pub fn new(pattern: &str) -> Result<Self> {
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(DaterangeError::InvalidFormat(pattern.to_string()));
        }

        let format = DateFormat {
            pattern: pattern.to_string(),
        };
        format.render(NaiveDate::default())?;
        Ok(format)
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Render a date as midnight of that day
    pub fn render(&self, date: NaiveDate) -> Result<String> {
        let midnight = date.and_time(NaiveTime::MIN);
        let mut output = String::new();
        write!(output, "{}", midnight.format(&self.pattern))
            .map_err(|_| DaterangeError::InvalidFormat(self.pattern.clone()))?;
        Ok(output)
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        DateFormat {
            pattern: DEFAULT_FORMAT.to_string(),
        }
    }
}
