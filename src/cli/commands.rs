//! CLI flag definitions

use crate::application::RangeRequest;
use crate::infrastructure::Defaults;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "daterange")]
#[command(about = "Print a sequence of dates", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The logging verbosity (10 debug, 20 info, 30 warning, 40 error)
    #[arg(
        short = 'v',
        long,
        value_name = "LEVEL",
        default_value_t = 20,
        allow_negative_numbers = true
    )]
    pub verbosity: i32,

    /// The format of the resulting dates, also tried first when parsing --start/--end [default: %Y/%m/%d]
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// The start date (today, yesterday, Ndaysago, or an absolute date) [default: today]
    #[arg(short, long, value_name = "DATE")]
    pub start: Option<String>,

    /// The end date, inclusive; takes precedence over --count
    #[arg(short, long, value_name = "DATE")]
    pub end: Option<String>,

    /// The number of dates, ignored when --end is given [default: 7]
    #[arg(short, long, value_name = "COUNT", allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// The delimiter printed between dates [default: newline]
    #[arg(
        short = 'd',
        long = "delimeter",
        visible_alias = "delimiter",
        value_name = "CHAR"
    )]
    pub delimiter: Option<String>,

    /// The number of days between dates [default: -1]
    #[arg(short, long, value_name = "INTERVAL", allow_negative_numbers = true)]
    pub interval: Option<i64>,

    /// Reverse the output
    #[arg(short, long)]
    pub reverse: bool,

    /// TOML file with default values (also read from DATERANGE_CONFIG)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Merge flags over `defaults` over the built-in values
    pub fn to_request(&self, defaults: &Defaults) -> RangeRequest {
        let builtin = RangeRequest::default();

        RangeRequest {
            start: self.start.clone(),
            end: self.end.clone(),
            format: self
                .format
                .clone()
                .or_else(|| defaults.format.clone())
                .unwrap_or(builtin.format),
            delimiter: self
                .delimiter
                .clone()
                .or_else(|| defaults.delimiter.clone())
                .unwrap_or(builtin.delimiter),
            interval: self
                .interval
                .or(defaults.interval)
                .unwrap_or(builtin.interval),
            count: self.count.or(defaults.count).unwrap_or(builtin.count),
            reverse: self.reverse || defaults.reverse.unwrap_or(builtin.reverse),
        }
    }
}
