//! Placeholder substitution.

use std::collections::HashMap;

use regex::Regex;

/// Renders templates by pure placeholder replacement.
///
/// Placeholders have the form `{{ident}}`. Substitution replaces every
/// occurrence with the value bound to `ident`; there are no conditionals,
/// loops or nested expansion, and unknown placeholders pass through
/// verbatim.
pub struct Renderer {
    placeholder: Regex,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Create a new renderer.
    pub fn new() -> Self {
        Self {
            // Match {{variable_name}} pattern
            placeholder: Regex::new(r"\{\{([a-zA-Z_][a-zA-Z0-9_]*)\}\}").unwrap(),
        }
    }

    /// Render `template` with the given variable bindings.
    ///
    /// Pure function of its inputs: the same template and bindings always
    /// produce byte-identical output.
    pub fn render(&self, template: &str, vars: &HashMap<String, String>) -> String {
        self.placeholder
            .replace_all(template, |caps: &regex::Captures| {
                vars.get(&caps[1])
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .to_string()
    }
}

/// The variable bindings used to render a project named `name`.
pub fn project_vars(name: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    vars.insert("Appname".to_string(), name.to_string());
    vars.insert("Backtick".to_string(), "`".to_string());
    vars
}
