//! Validation issue types.
//!
//! A DFA has at most one reported issue: the first failing structural
//! precondition, else the combined dangling-reference flags, else the first
//! selection that names no state.

use serde::{Deserialize, Serialize};

use dfa_model::ValidationError;

/// A missing top-level part of the automaton, in the order it is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructuralIssue {
    NoStates,
    NoSymbols,
    NoTransitions,
    NoStartState,
    NoAcceptStates,
}

impl StructuralIssue {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NoStates => "At least one state must be specified.",
            Self::NoSymbols => "At least one symbol must be specified.",
            Self::NoTransitions => "At least one state transition must be specified.",
            Self::NoStartState => "A start state must be specified.",
            Self::NoAcceptStates => "At least one accepting state must be specified.",
        }
    }
}

/// Dangling-reference flags, each OR-ed across all transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransitionFlags {
    pub missing_initial_state: bool,
    pub missing_subsequent_state: bool,
    pub missing_input_symbol: bool,
}

impl TransitionFlags {
    pub fn any(&self) -> bool {
        self.missing_initial_state || self.missing_subsequent_state || self.missing_input_symbol
    }

    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            missing_initial_state: self.missing_initial_state || other.missing_initial_state,
            missing_subsequent_state: self.missing_subsequent_state
                || other.missing_subsequent_state,
            missing_input_symbol: self.missing_input_symbol || other.missing_input_symbol,
        }
    }

    /// Compose the user-facing message, or `None` when nothing is missing.
    pub fn message(&self) -> Option<String> {
        let state_part = match (self.missing_initial_state, self.missing_subsequent_state) {
            (true, true) => Some("invalid initial and subsequent state"),
            (true, false) => Some("invalid initial state"),
            (false, true) => Some("invalid subsequent state"),
            (false, false) => None,
        };
        match (state_part, self.missing_input_symbol) {
            (Some(state), true) => Some(format!(
                "There are transitions with {state} and invalid input symbol"
            )),
            (Some(state), false) => Some(format!("There are transitions with {state}")),
            (None, true) => Some("There are transitions with invalid input symbol".to_string()),
            (None, false) => None,
        }
    }
}

/// Which picker a selected state name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    Start,
    Accept,
}

/// A start or accept state that is not a state of the automaton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionIssue {
    pub selection: Selection,
    pub name: String,
}

impl SelectionIssue {
    pub fn message(&self) -> String {
        match self.selection {
            Selection::Start => format!("The start state {} does not exist.", self.name),
            Selection::Accept => format!("The accepting state {} does not exist.", self.name),
        }
    }
}

/// The reason a DFA is not ready to be handed off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    Structural { issue: StructuralIssue },
    DanglingReferences { flags: TransitionFlags },
    DanglingSelection { issue: SelectionIssue },
}

impl Issue {
    pub fn message(&self) -> String {
        match self {
            Issue::Structural { issue } => issue.message().to_string(),
            Issue::DanglingReferences { flags } => flags.message().unwrap_or_default(),
            Issue::DanglingSelection { issue } => issue.message(),
        }
    }
}

impl From<Issue> for ValidationError {
    fn from(issue: Issue) -> Self {
        let message = issue.message();
        match issue {
            Issue::Structural { .. } => ValidationError::StructuralIncompleteness(message),
            Issue::DanglingReferences { .. } | Issue::DanglingSelection { .. } => {
                ValidationError::DanglingReference(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(initial: bool, subsequent: bool, symbol: bool) -> TransitionFlags {
        TransitionFlags {
            missing_initial_state: initial,
            missing_subsequent_state: subsequent,
            missing_input_symbol: symbol,
        }
    }

    #[test]
    fn message_precedence() {
        assert_eq!(flags(false, false, false).message(), None);
        assert_eq!(
            flags(true, true, false).message().unwrap(),
            "There are transitions with invalid initial and subsequent state"
        );
        assert_eq!(
            flags(true, false, false).message().unwrap(),
            "There are transitions with invalid initial state"
        );
        assert_eq!(
            flags(false, true, false).message().unwrap(),
            "There are transitions with invalid subsequent state"
        );
        assert_eq!(
            flags(false, false, true).message().unwrap(),
            "There are transitions with invalid input symbol"
        );
        assert_eq!(
            flags(true, true, true).message().unwrap(),
            "There are transitions with invalid initial and subsequent state and invalid input symbol"
        );
        assert_eq!(
            flags(false, true, true).message().unwrap(),
            "There are transitions with invalid subsequent state and invalid input symbol"
        );
    }

    #[test]
    fn merge_is_an_or() {
        let merged = flags(true, false, false).merge(flags(false, false, true));
        assert_eq!(merged, flags(true, false, true));
        assert!(merged.any());
        assert!(!TransitionFlags::default().any());
    }

    #[test]
    fn issue_converts_to_error_kind() {
        let error: ValidationError = Issue::Structural {
            issue: StructuralIssue::NoStartState,
        }
        .into();
        assert_eq!(
            error,
            ValidationError::StructuralIncompleteness("A start state must be specified.".into())
        );
        let error: ValidationError = Issue::DanglingReferences {
            flags: flags(false, false, true),
        }
        .into();
        assert!(matches!(error, ValidationError::DanglingReference(_)));

        let error: ValidationError = Issue::DanglingSelection {
            issue: SelectionIssue {
                selection: Selection::Accept,
                name: "S7".to_string(),
            },
        }
        .into();
        assert_eq!(
            error,
            ValidationError::DanglingReference("The accepting state S7 does not exist.".into())
        );
    }
}
