//! daterange - Print a sequence of dates
//!
//! Resolves start and end dates given as keywords (`today`, `yesterday`),
//! offsets (`3daysago`) or absolute dates, then steps between them (or for a
//! fixed count) by a signed number of days.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::DaterangeError;
