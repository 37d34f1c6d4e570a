//! cmdlp — a small command-line option parser.
//!
//! Register toggle and value options, parse the process arguments once,
//! then read values back as any `FromStr` type:
//!
//! ```
//! use cmdlp::OptionParser;
//!
//! let mut parser = OptionParser::new(["prog", "-i", "99"]);
//! parser.add_value('i', "--int", "The maximum simulated time", 1, false)?;
//! parser.add_value('s', "--string", "Run label", "hello", false)?;
//! parser.parse()?;
//!
//! assert_eq!(parser.get::<u32>('i')?, 99);
//! assert_eq!(parser.get::<String>("--string")?, "hello");
//! print!("{}", parser.help());
//! # Ok::<(), cmdlp::OptionError>(())
//! ```
//!
//! A value is only taken from the token after a flag when that token does
//! not start with `-`, so negative numbers cannot be passed as values.

pub mod args;
pub mod config;
pub mod error;
pub mod logging;

pub use args::{
    Flag, OptionDef, OptionKind, OptionParser, OptionRegistry, ParseState, TokenScanner,
};
pub use config::{ConfigError, HelpConfig, ParserConfig};
pub use error::{FlagPair, OptionError};
