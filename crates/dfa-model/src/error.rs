//! Error types shared by the DFA crates.
//!
//! Every error here is recoverable by the user: the editor reports the
//! message and keeps its last committed state.

use std::fmt;

use thiserror::Error;

/// The kind of entity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    State,
    Symbol,
    Transition,
}

impl EntityKind {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::State => "state",
            Self::Symbol => "symbol",
            Self::Transition => "transition",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A rule violated by an edit or by the automaton as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// A required field (name, character, description, transition endpoint) is empty.
    #[error("{message}")]
    MissingRequiredField {
        entity: EntityKind,
        message: &'static str,
    },

    /// A key or description is outside its length bound.
    #[error("{message}")]
    LengthViolation { entity: EntityKind, message: String },

    /// The automaton lacks states, symbols, transitions, a start state, or accept states.
    #[error("{0}")]
    StructuralIncompleteness(String),

    /// A transition or selection names a state or symbol that does not exist.
    #[error("{0}")]
    DanglingReference(String),
}

impl ValidationError {
    /// The entity the error is attached to, if it stems from a single edit.
    pub fn entity(&self) -> Option<EntityKind> {
        match self {
            Self::MissingRequiredField { entity, .. } | Self::LengthViolation { entity, .. } => {
                Some(*entity)
            }
            Self::StructuralIncompleteness(_) | Self::DanglingReference(_) => None,
        }
    }
}

/// Failure to read a DFA document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text is not JSON, or does not have the canonical document shape.
    #[error("malformed DFA document at line {line}, column {column}: {reason}")]
    MalformedDocument {
        line: usize,
        column: usize,
        reason: String,
    },
}

impl ParseError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::MalformedDocument { reason, .. } => {
                format!("Unable to read the DFA specification. {reason}")
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
