//! Help text — one aligned row per registered option.

use std::fmt::Write;

use crate::args::registry::OptionRegistry;
use crate::config::HelpConfig;

/// Render every option in registration order:
///
/// ```text
///     [-h] --help   (false) : Shows this help for the program.
///     [-d] --double (  0.2) : The time delta
/// ```
pub fn render_help(registry: &OptionRegistry, config: &HelpConfig) -> String {
    let flag_width = registry.longest_flag();
    let value_width = registry.longest_value();
    let mut out = String::new();
    for opt in registry {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{:indent$}[{}] {:<flag_width$} ({:>value_width$}){}{}",
            "",
            opt.short(),
            opt.long(),
            opt.text(),
            config.separator,
            opt.description(),
            indent = config.indent,
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::option::OptionDef;

    #[test]
    fn help_only_registry() {
        let registry = OptionRegistry::new();
        let help = render_help(&registry, &HelpConfig::default());
        assert_eq!(help, "    [-h] --help (false) : Shows this help for the program.\n");
    }

    #[test]
    fn aligns_flag_and_value_columns() {
        let mut registry = OptionRegistry::new();
        registry
            .insert(OptionDef::value('d', "--double", "The time delta", "0.2", false))
            .unwrap();
        registry
            .insert(OptionDef::value('s', "--string", "A name", "hello!", false))
            .unwrap();

        let help = render_help(&registry, &HelpConfig::default());
        let lines: Vec<&str> = help.lines().collect();
        assert_eq!(
            lines,
            vec![
                "    [-h] --help   ( false) : Shows this help for the program.",
                "    [-d] --double (   0.2) : The time delta",
                "    [-s] --string (hello!) : A name",
            ]
        );
    }

    #[test]
    fn honours_indent_and_separator() {
        let registry = OptionRegistry::new();
        let config = HelpConfig {
            indent: 0,
            separator: " - ".to_string(),
        };
        let help = render_help(&registry, &config);
        assert_eq!(help, "[-h] --help (false) - Shows this help for the program.\n");
    }
}
