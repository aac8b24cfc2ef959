//! Stepping from a start date toward an end date or for a fixed count

use crate::error::{DaterangeError, Result};
use chrono::{NaiveDate, TimeDelta};
use std::cmp::Ordering;
use tracing::debug;

/// Flip the sign of `interval` when it points away from `end`.
///
/// Without an end, or when `start == end`, the interval is returned as is.
fn corrected_interval(start: NaiveDate, end: Option<NaiveDate>, interval: i64) -> i64 {
    match end.map(|end| start.cmp(&end)) {
        Some(Ordering::Less) if interval < 0 => interval.saturating_neg(),
        Some(Ordering::Greater) if interval > 0 => interval.saturating_neg(),
        _ => interval,
    }
}

/// Reject a zero interval that could never reach a distinct end date
fn check_interval(start: NaiveDate, end: Option<NaiveDate>, interval: i64) -> Result<()> {
    match end {
        Some(end) if interval == 0 && start != end => Err(DaterangeError::InvalidInterval {
            interval,
            start,
            end,
        }),
        _ => Ok(()),
    }
}

/// Generate the dates from `start`, stepping `interval` days at a time.
///
/// With an end date the walk stops once it passes `end` (inclusive); the
/// interval sign is corrected first so the walk heads toward `end`, and a
/// zero interval with a distinct `end` is rejected before any stepping. Without
/// one, exactly `count` dates are produced, none when `count <= 0`.
/// `reverse` only flips the finished sequence.
pub fn generate(
    start: NaiveDate,
    end: Option<NaiveDate>,
    interval: i64,
    count: i64,
    reverse: bool,
) -> Result<Vec<NaiveDate>> {
    let requested = interval;
    let interval = corrected_interval(start, end, requested);
    if interval != requested {
        debug!(
            requested,
            corrected = interval,
            "interval sign corrected toward end date"
        );
    }
    check_interval(start, end, interval)?;

    if end == Some(start) {
        return Ok(vec![start]);
    }

    let step = TimeDelta::try_days(interval).ok_or_else(|| {
        DaterangeError::DateOutOfRange(format!("an interval of {} days", interval))
    })?;

    let mut dates = Vec::new();
    let mut current = start;
    let mut steps: i64 = 0;

    loop {
        let within = match end {
            Some(end) if interval > 0 => current <= end,
            Some(end) => current >= end,
            None => steps < count,
        };
        if !within {
            break;
        }

        dates.push(current);
        steps += 1;

        match current.checked_add_signed(step) {
            Some(next) => current = next,
            // Past the calendar's edge is also past any end date
            None if end.is_some() || steps >= count => break,
            None => {
                return Err(DaterangeError::DateOutOfRange(format!(
                    "{} days after {}",
                    interval, current
                )));
            }
        }
    }

    if reverse {
        dates.reverse();
    }

    debug!(interval, generated = dates.len(), reverse, "generated date range");
    Ok(dates)
}
