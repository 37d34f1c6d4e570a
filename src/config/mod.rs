//! Parser configuration: help-text layout loaded from TOML.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{HelpConfig, ParserConfig};
