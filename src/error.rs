//! Errors raised while registering, parsing and reading options.

use thiserror::Error;

use crate::args::OptionDef;

/// Short and long form of a registered option, for error reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagPair {
    pub short: String,
    pub long: String,
}

impl From<&OptionDef> for FlagPair {
    fn from(opt: &OptionDef) -> Self {
        Self {
            short: opt.short().to_string(),
            long: opt.long().to_string(),
        }
    }
}

impl std::fmt::Display for FlagPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.short, self.long)
    }
}

/// Errors that can occur when working with an option parser.
#[derive(Debug, Error)]
pub enum OptionError {
    /// The short or long flag is already taken by another option.
    #[error("Option {offered} already exists: {existing}")]
    DuplicateOption { offered: FlagPair, existing: FlagPair },

    /// A required value option found nothing on the command line.
    #[error("Cannot find required option: {long} [{short}]\n{help}")]
    MissingRequiredValue {
        short: String,
        long: String,
        /// Full help text, so the user sees every available option.
        help: String,
    },

    /// Options were read before `parse()` completed.
    #[error("Options must be parsed before they are read")]
    NotParsed,

    /// Registration or parsing attempted after `parse()` completed.
    #[error("Options have already been parsed")]
    AlreadyParsed,

    /// Registration or parsing attempted after a failed `parse()`.
    #[error("A previous parse failed; options cannot be changed or parsed again")]
    ParseFailed,

    /// No option answers to the flag.
    #[error("Unknown option '{flag}'")]
    UnknownOption { flag: String },

    /// The option's text does not parse as the requested type.
    #[error("Option '{flag}' value '{value}' is not a valid {target}")]
    Coercion {
        flag: String,
        value: String,
        target: &'static str,
    },
}

impl OptionError {
    /// Whether this error comes from the command line rather than from the
    /// program's own use of the parser.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            OptionError::MissingRequiredValue { .. } | OptionError::Coercion { .. }
        )
    }
}
