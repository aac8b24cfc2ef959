//! Generate range use case

use crate::domain::{generate, resolve, DateFormat, DEFAULT_FORMAT};
use crate::error::Result;
use chrono::NaiveDate;

pub const DEFAULT_COUNT: i64 = 7;
pub const DEFAULT_INTERVAL: i64 = -1;
pub const DEFAULT_DELIMITER: &str = "\n";

/// Range parameters before any date token is resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeRequest {
    pub start: Option<String>,
    pub end: Option<String>,
    pub format: String,
    pub delimiter: String,
    pub interval: i64,
    pub count: i64,
    pub reverse: bool,
}

impl Default for RangeRequest {
    fn default() -> Self {
        RangeRequest {
            start: None,
            end: None,
            format: DEFAULT_FORMAT.to_string(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            interval: DEFAULT_INTERVAL,
            count: DEFAULT_COUNT,
            reverse: false,
        }
    }
}

/// Resolved parameters for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeConfig {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
    pub interval: i64,
    pub count: i64,
    pub reverse: bool,
    pub format: DateFormat,
    pub delimiter: String,
}

impl RangeConfig {
    /// Resolve the request's tokens against `today`.
    ///
    /// A missing or empty start means today; a missing or empty end means
    /// the range is bounded by `count`.
    pub fn resolve(request: &RangeRequest, today: NaiveDate) -> Result<Self> {
        let format = DateFormat::new(&request.format)?;

        let start = match non_empty(&request.start) {
            Some(token) => resolve(token, &format, today)?,
            None => today,
        };
        let end = non_empty(&request.end)
            .map(|token| resolve(token, &format, today))
            .transpose()?;

        Ok(RangeConfig {
            start,
            end,
            interval: request.interval,
            count: request.count,
            reverse: request.reverse,
            format,
            delimiter: request.delimiter.clone(),
        })
    }
}

fn non_empty(token: &Option<String>) -> Option<&str> {
    token.as_deref().filter(|token| !token.is_empty())
}

/// Service for producing the date sequence of a resolved range
pub struct GenerateService {
    config: RangeConfig,
}

impl GenerateService {
    /// Create a new generate service
    pub fn new(config: RangeConfig) -> Self {
        GenerateService { config }
    }

    pub fn config(&self) -> &RangeConfig {
        &self.config
    }

    /// Walk the range, in final (possibly reversed) order
    pub fn execute(&self) -> Result<Vec<NaiveDate>> {
        let config = &self.config;
        generate(
            config.start,
            config.end,
            config.interval,
            config.count,
            config.reverse,
        )
    }
}
