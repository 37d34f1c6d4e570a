use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    #[serde(default)]
    pub help: HelpConfig,
}

/// Layout of the generated help text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpConfig {
    /// Leading spaces on every help row (default: 4).
    #[serde(default = "default_indent")]
    pub indent: usize,
    /// Text between the value column and the description (default: " : ").
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            separator: default_separator(),
        }
    }
}

fn default_indent() -> usize {
    4
}

fn default_separator() -> String {
    " : ".to_string()
}
