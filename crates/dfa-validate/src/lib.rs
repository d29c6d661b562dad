//! Validation for DFA specifications.
//!
//! Validation is advisory: it never blocks an edit or a load. The one place
//! a result is enforced is the hand-off to the generation service, which is
//! refused while [`validate`] reports a message.

pub mod checks;
mod issue;
mod metadata;

pub use checks::references::{TransitionCheck, check_transition_rows, check_transitions};
pub use issue::{Issue, Selection, SelectionIssue, StructuralIssue, TransitionFlags};
pub use metadata::{
    MAX_APP_NAME_LEN, MAX_APP_PACKAGE_LEN, MAX_CONTAINER_REGISTRY_LEN, MetadataError,
    validate_metadata,
};

use dfa_model::Dfa;
use tracing::debug;

/// Find the issue that keeps the DFA from being handed off, if any.
pub fn diagnose(dfa: &Dfa) -> Option<Issue> {
    let issue = checks::run_all(dfa);
    debug!(
        states = dfa.states.len(),
        symbols = dfa.alphabet.len(),
        transitions = dfa.transitions.len(),
        valid = issue.is_none(),
        "validated dfa"
    );
    issue
}

/// Validate a DFA, returning the user-facing message or `None` when valid.
pub fn validate(dfa: &Dfa) -> Option<String> {
    diagnose(dfa).map(|issue| issue.message())
}
