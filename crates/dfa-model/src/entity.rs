//! The three editable entity types of a DFA specification.
//!
//! Each type has two rule sets: `validate_new` for inserting a new key and
//! `validate_update` for overwriting the non-key fields of an existing one.

use serde::{Deserialize, Serialize};

use crate::error::{EntityKind, ValidationError};
use crate::ids::{STATE_NAME_REQUIRED, SYMBOL_REQUIRED, StateName, SymbolChar, state_ref};

/// Maximum number of characters in any description.
pub const MAX_DESCRIPTION_LEN: usize = 255;

const STATE_DESCRIPTION_REQUIRED: &str = "Please provide a description for the state.";
const TRANSITION_REQUIRED: &str =
    "Please select the initial state, input symbol, and subsequent state.";

fn check_description_len(entity: EntityKind, description: &str) -> Result<(), ValidationError> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::LengthViolation {
            entity,
            message: format!(
                "The description of the {entity} may be a maximum of {MAX_DESCRIPTION_LEN} characters long."
            ),
        });
    }
    Ok(())
}

/// A state of the automaton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub name: StateName,
    pub description: String,
}

impl State {
    /// Build a state, applying the rules for a new state.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let state = Self::from_parts(name, description);
        state.validate_new()?;
        Ok(state)
    }

    /// Build a state without checking it. Stores validate on upsert.
    pub fn from_parts(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: StateName::unchecked(name),
            description: description.into(),
        }
    }

    pub fn validate_new(&self) -> Result<(), ValidationError> {
        if self.name.as_str().is_empty() || self.description.is_empty() {
            return Err(ValidationError::MissingRequiredField {
                entity: EntityKind::State,
                message: STATE_NAME_REQUIRED,
            });
        }
        self.name.check()?;
        check_description_len(EntityKind::State, &self.description)
    }

    pub fn validate_update(&self) -> Result<(), ValidationError> {
        if self.description.is_empty() {
            return Err(ValidationError::MissingRequiredField {
                entity: EntityKind::State,
                message: STATE_DESCRIPTION_REQUIRED,
            });
        }
        check_description_len(EntityKind::State, &self.description)
    }
}

/// A symbol of the input alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    #[serde(rename = "symbol")]
    pub character: SymbolChar,
    pub description: String,
}

impl Symbol {
    /// Build a symbol from user input, applying the rules for a new symbol.
    pub fn new(character: &str, description: impl Into<String>) -> Result<Self, ValidationError> {
        let description = description.into();
        if character.is_empty() || description.is_empty() {
            return Err(ValidationError::MissingRequiredField {
                entity: EntityKind::Symbol,
                message: SYMBOL_REQUIRED,
            });
        }
        let symbol = Self::from_parts(SymbolChar::parse(character)?, description);
        symbol.validate_new()?;
        Ok(symbol)
    }

    pub fn from_parts(character: impl Into<SymbolChar>, description: impl Into<String>) -> Self {
        Self {
            character: character.into(),
            description: description.into(),
        }
    }

    pub fn validate_new(&self) -> Result<(), ValidationError> {
        self.validate_update()
    }

    pub fn validate_update(&self) -> Result<(), ValidationError> {
        if self.description.is_empty() {
            return Err(ValidationError::MissingRequiredField {
                entity: EntityKind::Symbol,
                message: SYMBOL_REQUIRED,
            });
        }
        check_description_len(EntityKind::Symbol, &self.description)
    }
}

/// Composite key of a transition. Orders by current state, then input symbol.
///
/// The current state is trimmed like a [`StateName`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionKey {
    pub current_state: String,
    pub input_symbol: String,
}

impl TransitionKey {
    pub fn new(current_state: impl Into<String>, input_symbol: impl Into<String>) -> Self {
        Self {
            current_state: StateName::unchecked(current_state).into_string(),
            input_symbol: input_symbol.into(),
        }
    }
}

/// A rule `(current state, input symbol) -> subsequent state`.
///
/// References are kept as plain strings: a transition may name states or
/// symbols that do not exist, which the validator reports. State references
/// are trimmed like a [`StateName`]; the input symbol is taken verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    #[serde(deserialize_with = "state_ref")]
    pub current_state_name: String,
    pub input_symbol: String,
    #[serde(deserialize_with = "state_ref")]
    pub subsequent_state_name: String,
    pub description: String,
}

impl Transition {
    pub fn new(
        current_state: impl Into<String>,
        input_symbol: impl Into<String>,
        subsequent_state: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            current_state_name: StateName::unchecked(current_state).into_string(),
            input_symbol: input_symbol.into(),
            subsequent_state_name: StateName::unchecked(subsequent_state).into_string(),
            description: description.into(),
        }
    }

    pub fn key(&self) -> TransitionKey {
        TransitionKey::new(&self.current_state_name, &self.input_symbol)
    }

    pub fn validate_new(&self) -> Result<(), ValidationError> {
        if self.current_state_name.is_empty()
            || self.input_symbol.is_empty()
            || self.subsequent_state_name.is_empty()
        {
            return Err(ValidationError::MissingRequiredField {
                entity: EntityKind::Transition,
                message: TRANSITION_REQUIRED,
            });
        }
        check_description_len(EntityKind::Transition, &self.description)
    }

    pub fn validate_update(&self) -> Result<(), ValidationError> {
        check_description_len(EntityKind::Transition, &self.description)
    }
}
