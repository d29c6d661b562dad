//! Configuration options for the editor.

use serde::{Deserialize, Serialize};

use crate::naming::NamingRule;

/// Description given to a freshly reset automaton.
pub const DEFAULT_DESCRIPTION: &str = "Deterministic Finite Automaton.";

/// Options controlling identifier proposals and editor defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// How new state names are proposed.
    pub state_naming: NamingRule,

    /// How new symbol characters are proposed.
    pub symbol_naming: NamingRule,

    /// Description set by [`Editor::reset`](crate::Editor::reset).
    pub default_description: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            state_naming: NamingRule::states(),
            symbol_naming: NamingRule::symbols(),
            default_description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl EditorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_state_naming(mut self, rule: NamingRule) -> Self {
        self.state_naming = rule;
        self
    }

    #[must_use]
    pub fn with_symbol_naming(mut self, rule: NamingRule) -> Self {
        self.symbol_naming = rule;
        self
    }

    #[must_use]
    pub fn with_default_description(mut self, description: impl Into<String>) -> Self {
        self.default_description = description.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_editor_conventions() {
        let options = EditorOptions::default();
        assert_eq!(options.state_naming.prefix, "S");
        assert_eq!(options.state_naming.start, '0');
        assert_eq!(options.symbol_naming.prefix, "");
        assert_eq!(options.symbol_naming.start, 'a');
        assert_eq!(options.default_description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let options: EditorOptions =
            serde_json::from_str(r#"{"state_naming": {"prefix": "Q", "start": "1"}}"#)
                .expect("options");
        assert_eq!(options.state_naming, NamingRule::new("Q", '1'));
        assert_eq!(options.symbol_naming, NamingRule::symbols());
        assert_eq!(options.default_description, DEFAULT_DESCRIPTION);
    }
}
