//! Domain layer - Date resolution and range generation

pub mod format;
pub mod range;
pub mod resolver;

pub use format::{DateFormat, DEFAULT_FORMAT};
pub use range::generate;
pub use resolver::{resolve, DateToken};
