//! Validation check modules.
//!
//! Each module performs a specific type of validation check.

pub mod references;
pub mod selections;
pub mod structure;

use dfa_model::Dfa;

use crate::issue::Issue;

/// Run the checks in order and return the first issue found.
///
/// Referential checks only run once the DFA is structurally complete.
pub fn run_all(dfa: &Dfa) -> Option<Issue> {
    if let Some(issue) = structure::check(dfa) {
        return Some(Issue::Structural { issue });
    }
    let flags = references::check_transitions(&dfa.states, &dfa.alphabet, &dfa.transitions);
    if flags.any() {
        return Some(Issue::DanglingReferences { flags });
    }
    selections::check(dfa).map(|issue| Issue::DanglingSelection { issue })
}
