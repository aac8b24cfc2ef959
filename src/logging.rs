//! Tracing setup

use tracing_subscriber::EnvFilter;

/// Target that receives log output by default.
const CRATE_TARGET: &str = "daterange";

/// Map a numeric verbosity level to a tracing level.
///
/// Lower numbers are noisier:
/// - below 10 -> trace
/// - 10..=19  -> debug
/// - 20..=29  -> info
/// - 30..=39  -> warn
/// - 40 and up -> error
pub fn level_for(verbosity: i32) -> &'static str {
    match verbosity {
        i32::MIN..=9 => "trace",
        10..=19 => "debug",
        20..=29 => "info",
        30..=39 => "warn",
        _ => "error",
    }
}

/// Initialize tracing based on the CLI verbosity level.
///
/// Events go to stderr. `RUST_LOG` overrides the CLI flag if set.
pub fn init(verbosity: i32) {
    let default_filter = format!("{}={}", CRATE_TARGET, level_for(verbosity));

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
