//! Option model — one registered flag and its current state.

use std::fmt;

/// Rendered width of a toggle's value column (`"false"`).
pub const TOGGLE_VALUE_WIDTH: usize = 5;

/// What kind of option this is, with its mutable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind {
    /// Boolean flag, no value (e.g., --verbose).
    Toggle {
        /// Whether the flag was given (or the registered default).
        active: bool,
    },
    /// Flag followed by a value (e.g., --double 0.5).
    Value {
        /// Textual value; the stringified default until parsing finds one.
        raw_value: String,
        /// Parsing fails if no value is found on the command line.
        required: bool,
    },
}

/// A single option definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDef {
    short: String,
    long: String,
    description: String,
    /// Kind-specific state.
    pub kind: OptionKind,
}

impl OptionDef {
    /// Create a toggle option, inactive unless `active` is set.
    pub fn toggle(short: char, long: &str, description: &str, active: bool) -> Self {
        Self {
            short: short_flag(short),
            long: long_flag(long),
            description: description.to_string(),
            kind: OptionKind::Toggle { active },
        }
    }

    /// Create a value option with the given textual default.
    pub fn value(
        short: char,
        long: &str,
        description: &str,
        default: impl Into<String>,
        required: bool,
    ) -> Self {
        Self {
            short: short_flag(short),
            long: long_flag(long),
            description: description.to_string(),
            kind: OptionKind::Value {
                raw_value: default.into(),
                required,
            },
        }
    }

    /// Short form, always `-x`.
    pub fn short(&self) -> &str {
        &self.short
    }

    /// Long form, always `--xxxx`.
    pub fn long(&self) -> &str {
        &self.long
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Current value as text; toggles render as `"true"`/`"false"`.
    pub fn text(&self) -> &str {
        match &self.kind {
            OptionKind::Toggle { active: true } => "true",
            OptionKind::Toggle { active: false } => "false",
            OptionKind::Value { raw_value, .. } => raw_value,
        }
    }

    /// Width of the value column needed to render this option.
    pub fn value_width(&self) -> usize {
        match &self.kind {
            OptionKind::Toggle { .. } => TOGGLE_VALUE_WIDTH,
            OptionKind::Value { raw_value, .. } => raw_value.chars().count(),
        }
    }

    /// Whether the option carries a usable value: a non-empty value or an
    /// active toggle.
    pub fn is_set(&self) -> bool {
        match &self.kind {
            OptionKind::Toggle { active } => *active,
            OptionKind::Value { raw_value, .. } => !raw_value.is_empty(),
        }
    }

    /// Check whether this option answers to the given flag.
    pub fn matches(&self, flag: &Flag<'_>) -> bool {
        match flag {
            Flag::Short(c) => {
                let mut chars = self.short.chars().skip(1);
                chars.next() == Some(*c) && chars.next().is_none()
            }
            Flag::Long(name) => self.long == long_flag(name),
        }
    }
}

/// A flag used to look an option up, either by its short or its long form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag<'a> {
    /// Single character (`d` for `-d`).
    Short(char),
    /// Long name, with or without the leading `--`.
    Long(&'a str),
}

impl From<char> for Flag<'_> {
    fn from(c: char) -> Self {
        Flag::Short(c)
    }
}

impl<'a> From<&'a str> for Flag<'a> {
    /// `"d"` and `"-d"` are short flags; everything else is a long flag.
    fn from(s: &'a str) -> Self {
        let bare = match s.strip_prefix('-') {
            Some(rest) if !rest.starts_with('-') => rest,
            Some(_) => return Flag::Long(s),
            None => s,
        };
        let mut chars = bare.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Flag::Short(c),
            _ => Flag::Long(s),
        }
    }
}

impl<'a> From<&'a String> for Flag<'a> {
    fn from(s: &'a String) -> Self {
        Flag::from(s.as_str())
    }
}

impl fmt::Display for Flag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flag::Short(c) => write!(f, "-{}", c),
            Flag::Long(name) => write!(f, "{}", long_flag(name)),
        }
    }
}

/// `d` → `-d`.
pub(crate) fn short_flag(c: char) -> String {
    format!("-{}", c)
}

/// `double`, `-double` and `--double` all become `--double`.
pub(crate) fn long_flag(name: &str) -> String {
    format!("--{}", name.trim_start_matches('-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_renders_boolean_text() {
        let mut opt = OptionDef::toggle('v', "--verbose", "Verbose output", false);
        assert_eq!(opt.text(), "false");
        assert!(!opt.is_set());

        opt.kind = OptionKind::Toggle { active: true };
        assert_eq!(opt.text(), "true");
        assert!(opt.is_set());
        assert_eq!(opt.value_width(), TOGGLE_VALUE_WIDTH);
    }

    #[test]
    fn value_width_follows_raw_value() {
        let opt = OptionDef::value('s', "--string", "Name", "hello", false);
        assert_eq!(opt.value_width(), 5);
        assert_eq!(opt.text(), "hello");

        let empty = OptionDef::value('o', "--output", "Output", "", false);
        assert_eq!(empty.value_width(), 0);
        assert!(!empty.is_set());
    }

    #[test]
    fn long_flag_is_normalized() {
        let opt = OptionDef::toggle('q', "quiet", "Quiet", false);
        assert_eq!(opt.long(), "--quiet");
        assert_eq!(opt.short(), "-q");
    }

    #[test]
    fn single_dash_long_flag_gets_two_dashes() {
        let opt = OptionDef::toggle('v', "-verbose", "Verbose", false);
        assert_eq!(opt.long(), "--verbose");
        assert!(opt.matches(&Flag::from("-verbose")));
        assert!(opt.matches(&Flag::from("--verbose")));
        assert_eq!(Flag::from("-verbose").to_string(), "--verbose");
        assert_eq!(long_flag("---verbose"), "--verbose");
    }

    #[test]
    fn flag_from_str_picks_form() {
        assert_eq!(Flag::from("d"), Flag::Short('d'));
        assert_eq!(Flag::from("-d"), Flag::Short('d'));
        assert_eq!(Flag::from("--double"), Flag::Long("--double"));
        assert_eq!(Flag::from("double"), Flag::Long("double"));
        assert_eq!(Flag::from("--d"), Flag::Long("--d"));
        assert_eq!(Flag::from('x'), Flag::Short('x'));
    }

    #[test]
    fn matches_either_form() {
        let opt = OptionDef::value('d', "--double", "Delta", "0.2", false);
        assert!(opt.matches(&Flag::Short('d')));
        assert!(opt.matches(&Flag::Long("--double")));
        assert!(opt.matches(&Flag::Long("double")));
        assert!(!opt.matches(&Flag::Short('i')));
        assert!(!opt.matches(&Flag::Long("--int")));
    }

    #[test]
    fn flag_display_uses_dashes() {
        assert_eq!(Flag::Short('d').to_string(), "-d");
        assert_eq!(Flag::Long("double").to_string(), "--double");
    }
}
