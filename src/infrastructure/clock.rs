//! Local clock

use chrono::{Local, NaiveDate};

/// Current calendar day on the local clock.
///
/// Read once per run and passed down, so relative tokens all see the same day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
