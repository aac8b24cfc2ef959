use clap::Parser;
use daterange::application::{GenerateService, RangeConfig};
use daterange::cli::{format_dates, Cli};
use daterange::error::DaterangeError;
use daterange::infrastructure::{clock, Defaults};
use daterange::logging;
use std::io::Write;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbosity);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), DaterangeError> {
    let defaults = Defaults::discover(cli.config.as_deref())?;
    let request = cli.to_request(&defaults);

    let config = RangeConfig::resolve(&request, clock::today())?;
    let service = GenerateService::new(config);
    let dates = service.execute()?;

    let config = service.config();
    let output = format_dates(&dates, &config.format, &config.delimiter)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output)?;
    Ok(())
}
