//! Demo program: registers a few options, parses the process arguments and
//! prints the resulting values.

use std::path::Path;

use anyhow::Context;
use cmdlp::{logging, OptionError, OptionParser, ParserConfig};

/// Env var naming a TOML file with help layout settings.
const CONFIG_ENV: &str = "CMDLP_CONFIG";

fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let config = match std::env::var(CONFIG_ENV) {
        Ok(path) => ParserConfig::load_from(Path::new(&path))
            .with_context(|| format!("Failed to load {}", CONFIG_ENV))?,
        Err(_) => ParserConfig::default(),
    };

    match run(config) {
        // Bad command-line input: print the message (with help, if any) as-is
        Err(e) if e.is_user_error() => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        other => Ok(other?),
    }
}

fn run(config: ParserConfig) -> Result<(), OptionError> {
    let mut options = OptionParser::with_config(std::env::args(), config);
    options.add_value('d', "--double", "The time delta", 0.2, false)?;
    options.add_value('i', "--int", "The maximum simulated time", 1, false)?;
    options.add_value(
        's',
        "--string",
        "Used to determine when a solution is considered complete",
        "hello",
        false,
    )?;
    options.parse()?;

    if options.get::<bool>('h')? {
        print!("{}", options.help());
        return Ok(());
    }

    println!("{}", options.get::<f64>('d')?);
    println!("{}", options.get::<i64>('i')?);
    println!("{}", options.get::<String>('s')?);
    Ok(())
}
