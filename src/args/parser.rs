//! Parser — ties the registry, scanner and accessors together.

use std::any::type_name;
use std::fmt::Display;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::args::help::render_help;
use crate::args::option::{Flag, OptionDef, OptionKind};
use crate::args::registry::OptionRegistry;
use crate::args::tokens::TokenScanner;
use crate::config::ParserConfig;
use crate::error::OptionError;

/// Where the parser is in its lifecycle. Moves forward only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    /// Options may be registered; values may not be read.
    Unparsed,
    /// Options are populated and read-only.
    Parsed,
    /// A required value was missing; the parser cannot be used again.
    Failed,
}

/// Command-line option parser.
///
/// Register options, call [`parse`](Self::parse) once, then read values:
///
/// ```
/// use cmdlp::OptionParser;
///
/// let mut parser = OptionParser::new(["prog", "--double", "1.5", "-v"]);
/// parser.add_value('d', "--double", "The time delta", 0.2, false)?;
/// parser.add_toggle('v', "--verbose", "Verbose output", false)?;
/// parser.parse()?;
///
/// assert_eq!(parser.get::<f64>("--double")?, 1.5);
/// assert!(parser.get::<bool>('v')?);
/// # Ok::<(), cmdlp::OptionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct OptionParser {
    scanner: TokenScanner,
    registry: OptionRegistry,
    config: ParserConfig,
    state: ParseState,
}

impl OptionParser {
    /// Create a parser over a full argument vector (program path first).
    pub fn new<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(argv, ParserConfig::default())
    }

    /// Create a parser over the current process arguments.
    pub fn from_env() -> Self {
        Self::new(std::env::args())
    }

    /// Create a parser with a custom help layout.
    pub fn with_config<I, S>(argv: I, config: ParserConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            scanner: TokenScanner::new(argv),
            registry: OptionRegistry::new(),
            config,
            state: ParseState::Unparsed,
        }
    }

    /// Register an option that takes a value.
    ///
    /// The default is stored in its `Display` form. A `required` option makes
    /// [`parse`](Self::parse) fail when the command line does not supply it.
    pub fn add_value(
        &mut self,
        short: char,
        long: &str,
        description: &str,
        default: impl Display,
        required: bool,
    ) -> Result<(), OptionError> {
        self.register(OptionDef::value(
            short,
            long,
            description,
            default.to_string(),
            required,
        ))
    }

    /// Register a boolean toggle.
    pub fn add_toggle(
        &mut self,
        short: char,
        long: &str,
        description: &str,
        default: bool,
    ) -> Result<(), OptionError> {
        self.register(OptionDef::toggle(short, long, description, default))
    }

    fn register(&mut self, option: OptionDef) -> Result<(), OptionError> {
        self.ensure_unparsed()?;
        self.registry.insert(option)
    }

    fn ensure_unparsed(&self) -> Result<(), OptionError> {
        match self.state {
            ParseState::Unparsed => Ok(()),
            ParseState::Parsed => Err(OptionError::AlreadyParsed),
            ParseState::Failed => Err(OptionError::ParseFailed),
        }
    }

    /// Populate every option from the command line.
    ///
    /// Value options look for their short flag first and fall back to the
    /// long flag; toggles are switched on by either form.
    ///
    /// # Errors
    /// - `MissingRequiredValue` if a required value option was not given;
    ///   the parser moves to `Failed`.
    /// - `AlreadyParsed` or `ParseFailed` on a second call.
    pub fn parse(&mut self) -> Result<(), OptionError> {
        self.ensure_unparsed()?;

        let mut widest = 0;
        let mut missing = None;
        for opt in self.registry.iter_mut() {
            let (short, long) = (opt.short().to_string(), opt.long().to_string());
            match &mut opt.kind {
                OptionKind::Value {
                    raw_value,
                    required,
                } => {
                    let found = self
                        .scanner
                        .value_of(&short)
                        .or_else(|| self.scanner.value_of(&long));
                    match found {
                        Some(value) => {
                            debug!(flag = %long, value, "found option value");
                            *raw_value = value.to_string();
                            widest = widest.max(value.chars().count());
                        }
                        None if *required => {
                            missing = Some((short, long));
                            break;
                        }
                        None => {}
                    }
                }
                OptionKind::Toggle { active } => {
                    if self.scanner.has(&short) || self.scanner.has(&long) {
                        debug!(flag = %long, "found toggle");
                        *active = true;
                    }
                }
            }
        }
        self.registry.update_value_width(widest);

        if let Some((short, long)) = missing {
            self.state = ParseState::Failed;
            return Err(OptionError::MissingRequiredValue {
                short,
                long,
                help: self.help(),
            });
        }

        self.state = ParseState::Parsed;
        Ok(())
    }

    /// Read an option's value as `T`.
    ///
    /// Toggles read as `"true"`/`"false"`; `String` receives the text as-is.
    ///
    /// # Errors
    /// `NotParsed` before [`parse`](Self::parse), `UnknownOption` if nothing
    /// answers to `flag`, `Coercion` if the text does not parse as `T`.
    pub fn get<'a, T: FromStr>(&self, flag: impl Into<Flag<'a>>) -> Result<T, OptionError> {
        let flag = flag.into();
        let opt = self
            .lookup(&flag)?
            .ok_or_else(|| OptionError::UnknownOption {
                flag: flag.to_string(),
            })?;
        opt.text().parse::<T>().map_err(|_| OptionError::Coercion {
            flag: flag.to_string(),
            value: opt.text().to_string(),
            target: type_name::<T>(),
        })
    }

    /// Read an option's value as `T`, falling back to `T::default()` when
    /// the option is unknown or its text does not parse.
    ///
    /// The whole text must parse: `"2.5"` read as an integer and a toggle
    /// read as an integer both give `0`, never a truncated prefix or `1`.
    ///
    /// # Errors
    /// `NotParsed` before [`parse`](Self::parse).
    pub fn get_or_default<'a, T: FromStr + Default>(
        &self,
        flag: impl Into<Flag<'a>>,
    ) -> Result<T, OptionError> {
        match self.get(flag) {
            Ok(value) => Ok(value),
            Err(OptionError::NotParsed) => Err(OptionError::NotParsed),
            Err(e) => {
                warn!(error = %e, "using default value");
                Ok(T::default())
            }
        }
    }

    /// Whether a value option holds a non-empty value, or a toggle is active.
    /// Unknown flags report `false`.
    ///
    /// # Errors
    /// `NotParsed` before [`parse`](Self::parse).
    pub fn has<'a>(&self, flag: impl Into<Flag<'a>>) -> Result<bool, OptionError> {
        Ok(self
            .lookup(&flag.into())?
            .is_some_and(OptionDef::is_set))
    }

    fn lookup(&self, flag: &Flag<'_>) -> Result<Option<&OptionDef>, OptionError> {
        match self.state {
            ParseState::Unparsed | ParseState::Failed => Err(OptionError::NotParsed),
            ParseState::Parsed => Ok(self.registry.find(flag)),
        }
    }

    /// Help text with one aligned row per option, help toggle first.
    pub fn help(&self) -> String {
        render_help(&self.registry, &self.config.help)
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    pub fn is_parsed(&self) -> bool {
        self.state == ParseState::Parsed
    }

    /// Registered options in registration order.
    pub fn options(&self) -> &OptionRegistry {
        &self.registry
    }

    /// Tokens captured from the command line.
    pub fn tokens(&self) -> &[String] {
        self.scanner.tokens()
    }
}
