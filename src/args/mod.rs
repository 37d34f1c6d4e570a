//! Command-line option handling.
//!
//! ```text
//! argv → TokenScanner → OptionParser::parse → OptionRegistry → get / has / help
//! ```
//!
//! Options are registered up front, populated by a single parse pass, and
//! read-only afterwards.

mod help;
mod option;
mod parser;
mod registry;
mod tokens;

pub use help::render_help;
pub use option::{Flag, OptionDef, OptionKind, TOGGLE_VALUE_WIDTH};
pub use parser::{OptionParser, ParseState};
pub use registry::{OptionRegistry, HELP_DESCRIPTION, HELP_LONG, HELP_SHORT};
pub use tokens::TokenScanner;
