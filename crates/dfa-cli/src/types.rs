use std::path::PathBuf;

use clap::ValueEnum;

use dfa_model::Transition;
use dfa_validate::{Issue, TransitionCheck};

/// Outcome of `dfa validate`.
#[derive(Debug)]
pub struct ValidateReport {
    pub path: PathBuf,
    pub issue: Option<Issue>,
    pub rows: Vec<TransitionRow>,
    pub dropped_selections: Vec<String>,
}

impl ValidateReport {
    pub fn is_valid(&self) -> bool {
        self.issue.is_none()
    }

    pub fn message(&self) -> Option<String> {
        self.issue.as_ref().map(Issue::message)
    }
}

/// A transition and whether its references resolve.
#[derive(Debug)]
pub struct TransitionRow {
    pub transition: Transition,
    pub check: TransitionCheck,
}

/// Which identifier `dfa suggest` proposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SuggestKind {
    #[default]
    State,
    Symbol,
}
