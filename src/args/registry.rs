//! Option registry — ordered, duplicate-free collection of options.

use tracing::debug;

use crate::args::option::{Flag, OptionDef};
use crate::error::{FlagPair, OptionError};

/// The built-in help toggle, always the first entry.
pub const HELP_SHORT: char = 'h';
pub const HELP_LONG: &str = "--help";
pub const HELP_DESCRIPTION: &str = "Shows this help for the program.";

/// Ordered collection of options, in registration order.
///
/// Tracks the widest long flag and the widest value so help rows line up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRegistry {
    options: Vec<OptionDef>,
    longest_flag: usize,
    longest_value: usize,
}

impl OptionRegistry {
    /// Create a registry holding only the help toggle.
    pub fn new() -> Self {
        let mut registry = Self {
            options: Vec::new(),
            longest_flag: 0,
            longest_value: 0,
        };
        registry.push(OptionDef::toggle(
            HELP_SHORT,
            HELP_LONG,
            HELP_DESCRIPTION,
            false,
        ));
        registry
    }

    /// Append an option.
    ///
    /// # Errors
    /// Returns `DuplicateOption` if its short or long flag is already
    /// registered; the registry is left unchanged.
    pub fn insert(&mut self, option: OptionDef) -> Result<(), OptionError> {
        if let Some(existing) = self
            .options
            .iter()
            .find(|o| o.short() == option.short() || o.long() == option.long())
        {
            return Err(OptionError::DuplicateOption {
                offered: FlagPair::from(&option),
                existing: FlagPair::from(existing),
            });
        }
        debug!(short = option.short(), long = option.long(), "registered option");
        self.push(option);
        Ok(())
    }

    fn push(&mut self, option: OptionDef) {
        self.longest_flag = self.longest_flag.max(option.long().chars().count());
        self.longest_value = self.longest_value.max(option.value_width());
        self.options.push(option);
    }

    /// First option answering to `flag`.
    pub fn find(&self, flag: &Flag<'_>) -> Option<&OptionDef> {
        self.options.iter().find(|o| o.matches(flag))
    }

    pub fn find_mut(&mut self, flag: &Flag<'_>) -> Option<&mut OptionDef> {
        self.options.iter_mut().find(|o| o.matches(flag))
    }

    pub fn contains(&self, flag: &Flag<'_>) -> bool {
        self.find(flag).is_some()
    }

    /// Widen the value column after a value changed during parsing.
    pub fn update_value_width(&mut self, length: usize) {
        self.longest_value = self.longest_value.max(length);
    }

    /// Options in registration order, help toggle first.
    pub fn iter(&self) -> std::slice::Iter<'_, OptionDef> {
        self.options.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, OptionDef> {
        self.options.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always false: the help toggle is registered on construction.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Width of the widest long flag.
    pub fn longest_flag(&self) -> usize {
        self.longest_flag
    }

    /// Width of the widest value.
    pub fn longest_value(&self) -> usize {
        self.longest_value
    }
}

impl Default for OptionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a OptionRegistry {
    type Item = &'a OptionDef;
    type IntoIter = std::slice::Iter<'a, OptionDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
