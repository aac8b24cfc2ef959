//! Date token parsing and resolution

use crate::domain::format::DateFormat;
use crate::error::{DaterangeError, Result};
use chrono::format::{self, ParseErrorKind, Parsed, StrftimeItems};
use chrono::{Days, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Absolute formats tried, in order, after the preferred format
pub const FALLBACK_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];

/// Year used when a format leaves the year out (e.g. `%m/%d`)
pub const DEFAULT_YEAR: i64 = 1900;

fn days_ago_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^([0-9]+)days?ago$").unwrap())
}

/// A start or end date as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateToken {
    /// Current day
    Today,
    /// Previous day
    Yesterday,
    /// N days before today (`3daysago`, `1dayago`)
    DaysAgo(u64),
    /// Date given in one of the accepted absolute formats
    Absolute(NaiveDate),
}

impl DateToken {
    /// Parse a token.
    ///
    /// Keywords and offsets are matched exactly (case-sensitive, no
    /// trimming). Absolute dates try `preferred` first, then
    /// [`FALLBACK_FORMATS`].
    pub fn parse(input: &str, preferred: &DateFormat) -> Result<Self> {
        match input {
            "today" => Ok(DateToken::Today),
            "yesterday" => Ok(DateToken::Yesterday),
            _ => {
                if let Some(days) = Self::parse_days_ago(input)? {
                    return Ok(DateToken::DaysAgo(days));
                }

                parse_absolute(input, preferred)
                    .map(DateToken::Absolute)
                    .ok_or_else(|| DaterangeError::UnparseableDate(input.to_string()))
            }
        }
    }

    fn parse_days_ago(input: &str) -> Result<Option<u64>> {
        let Some(captures) = days_ago_regex().captures(input) else {
            return Ok(None);
        };

        captures[1]
            .parse::<u64>()
            .map(Some)
            .map_err(|_| DaterangeError::DateOutOfRange(input.to_string()))
    }

    /// Resolve this token to a date, counting relative tokens back from `today`
    pub fn resolve(&self, today: NaiveDate) -> Result<NaiveDate> {
        match self {
            DateToken::Today => Ok(today),
            DateToken::Yesterday => days_before(today, 1),
            DateToken::DaysAgo(days) => days_before(today, *days),
            DateToken::Absolute(date) => Ok(*date),
        }
    }
}

fn days_before(today: NaiveDate, days: u64) -> Result<NaiveDate> {
    today.checked_sub_days(Days::new(days)).ok_or_else(|| {
        DaterangeError::DateOutOfRange(format!("{} days before {}", days, today))
    })
}

/// Formats tried for an absolute date, preferred first
pub fn candidate_formats(preferred: &DateFormat) -> impl Iterator<Item = &str> {
    std::iter::once(preferred.as_str()).chain(FALLBACK_FORMATS)
}

fn parse_absolute(input: &str, preferred: &DateFormat) -> Option<NaiveDate> {
    candidate_formats(preferred).find_map(|format| parse_with_format(input, format))
}

/// Parse the whole input with one pattern.
///
/// Leading whitespace or a sign is only accepted when the pattern itself
/// starts with it. A pattern that leaves out the year gets [`DEFAULT_YEAR`];
/// a missing month or day then defaults to 1.
fn parse_with_format(input: &str, pattern: &str) -> Option<NaiveDate> {
    let first = input.chars().next()?;
    if (first.is_whitespace() || first == '+' || first == '-') && !pattern.starts_with(first) {
        return None;
    }

    let mut parsed = Parsed::new();
    format::parse(&mut parsed, input, StrftimeItems::new(pattern)).ok()?;

    let fillers: [fn(&mut Parsed) -> format::ParseResult<()>; 3] = [
        |p| p.set_year(DEFAULT_YEAR),
        |p| p.set_month(1),
        |p| p.set_day(1),
    ];
    for fill in fillers {
        match parsed.to_naive_date() {
            Ok(date) => return Some(date),
            Err(e) if e.kind() == ParseErrorKind::NotEnough => {
                // Fails only when the field was already parsed, which keeps it
                let _ = fill(&mut parsed);
            }
            Err(_) => return None,
        }
    }
    parsed.to_naive_date().ok()
}

/// Resolve a raw token to a calendar date.
///
/// `today` is read once by the caller so every relative token in a run
/// agrees on the current day.
pub fn resolve(token: &str, preferred: &DateFormat, today: NaiveDate) -> Result<NaiveDate> {
    let parsed = DateToken::parse(token, preferred)?;
    let date = parsed.resolve(today)?;
    debug!(token, ?parsed, %date, "resolved date token");
    Ok(date)
}
