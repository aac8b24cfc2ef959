//! Infrastructure layer - Clock and defaults file

pub mod clock;
pub mod config;

pub use config::Defaults;
