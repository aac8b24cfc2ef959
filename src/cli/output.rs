//! Output formatting utilities

use crate::domain::DateFormat;
use crate::error::Result;
use chrono::NaiveDate;

/// Render each date with `format` and join them with `delimiter`
pub fn format_dates(dates: &[NaiveDate], format: &DateFormat, delimiter: &str) -> Result<String> {
    let rendered = dates
        .iter()
        .map(|date| format.render(*date))
        .collect::<Result<Vec<_>>>()?;
    Ok(rendered.join(delimiter))
}
