//! Token scanner — raw args → presence/value queries.

use std::borrow::Cow;

use tracing::trace;

/// Prefix that marks a token as a flag rather than a value.
const FLAG_PREFIX: &str = "-";

/// Read-only view over the process arguments, excluding the program path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenScanner {
    tokens: Vec<String>,
}

impl TokenScanner {
    /// Capture a full argument vector; the first element (the executable
    /// path) is skipped.
    pub fn new<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: argv.into_iter().skip(1).map(Into::into).collect(),
        }
    }

    /// Capture tokens that already exclude the program path.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Captured tokens in command-line order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Check whether `flag` appears verbatim as a token.
    pub fn has(&self, flag: &str) -> bool {
        let flag = normalize(flag);
        let found = self.tokens.iter().any(|t| *t == flag);
        trace!(flag = %flag, found, "scanner presence query");
        found
    }

    /// Value following the first occurrence of `flag`.
    ///
    /// Returns `None` if the flag is absent, is the last token, or is
    /// followed by something that looks like another flag. Values starting
    /// with `-` (including negative numbers) are therefore never returned.
    pub fn value_of(&self, flag: &str) -> Option<&str> {
        let flag = normalize(flag);
        let pos = self.tokens.iter().position(|t| *t == flag)?;
        let value = self
            .tokens
            .get(pos + 1)
            .map(String::as_str)
            .filter(|next| !next.is_empty() && !looks_like_flag(next));
        trace!(flag = %flag, value = ?value, "scanner value query");
        value
    }
}

/// A single bare character is a short flag: `d` → `-d`.
fn normalize(flag: &str) -> Cow<'_, str> {
    let mut chars = flag.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c != '-' => Cow::Owned(format!("-{}", c)),
        _ => Cow::Borrowed(flag),
    }
}

fn looks_like_flag(token: &str) -> bool {
    starts_with_ignore_case(token, FLAG_PREFIX)
}

/// Case-insensitive prefix test. An empty source or prefix never matches.
fn starts_with_ignore_case(source: &str, prefix: &str) -> bool {
    if source.is_empty() || prefix.is_empty() {
        return false;
    }
    let mut source = source.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|p| source.next() == Some(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner(tokens: &[&str]) -> TokenScanner {
        TokenScanner::from_tokens(tokens.iter().copied())
    }

    #[test]
    fn skips_program_path() {
        let s = TokenScanner::new(["/usr/bin/prog", "-d", "1.0"]);
        assert_eq!(s.tokens(), &["-d".to_string(), "1.0".to_string()]);
        assert!(!s.has("/usr/bin/prog"));
    }

    #[test]
    fn empty_argv_has_no_tokens() {
        let s = TokenScanner::new(Vec::<String>::new());
        assert!(s.tokens().is_empty());
        assert!(!s.has("-h"));
        assert_eq!(s.value_of("-h"), None);
    }

    #[test]
    fn presence_is_verbatim() {
        let s = scanner(&["--verbose", "-x"]);
        assert!(s.has("--verbose"));
        assert!(s.has("-x"));
        assert!(!s.has("--verb"));
        assert!(!s.has("-X"));
    }

    #[test]
    fn bare_character_is_normalized() {
        let s = scanner(&["-d", "0.5"]);
        assert!(s.has("d"));
        assert_eq!(s.value_of("d"), Some("0.5"));
        assert!(!s.has("-"));
    }

    #[test]
    fn value_is_next_token() {
        let s = scanner(&["--int", "99", "--name", "bob"]);
        assert_eq!(s.value_of("--int"), Some("99"));
        assert_eq!(s.value_of("--name"), Some("bob"));
    }

    #[test]
    fn value_rejects_flag_lookalike() {
        let s = scanner(&["--double", "--int", "3"]);
        assert_eq!(s.value_of("--double"), None);
        assert_eq!(s.value_of("--int"), Some("3"));
    }

    #[test]
    fn negative_number_is_not_a_value() {
        let s = scanner(&["--double", "-5"]);
        assert_eq!(s.value_of("--double"), None);
    }

    #[test]
    fn trailing_flag_has_no_value() {
        let s = scanner(&["--verbose", "--double"]);
        assert_eq!(s.value_of("--double"), None);
    }

    #[test]
    fn empty_following_token_is_not_a_value() {
        let s = scanner(&["--name", ""]);
        assert_eq!(s.value_of("--name"), None);
    }

    #[test]
    fn first_occurrence_wins() {
        let s = scanner(&["-d", "1", "-d", "2"]);
        assert_eq!(s.value_of("-d"), Some("1"));
    }

    #[test]
    fn prefix_comparison() {
        assert!(starts_with_ignore_case("-x", "-"));
        assert!(starts_with_ignore_case("ABC", "ab"));
        assert!(!starts_with_ignore_case("a", "ab"));
        assert!(!starts_with_ignore_case("", "-"));
        assert!(!starts_with_ignore_case("x", ""));
    }
}
