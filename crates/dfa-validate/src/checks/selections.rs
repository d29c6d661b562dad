//! Start and accept states must name existing states.

use std::collections::BTreeSet;

use dfa_model::Dfa;

use crate::issue::{Selection, SelectionIssue};

/// Return the first selected name that is not a state.
///
/// The start state is checked before the accept states, which are checked
/// in document order.
pub fn check(dfa: &Dfa) -> Option<SelectionIssue> {
    let state_names: BTreeSet<&str> = dfa.states.iter().map(|s| s.name.as_str()).collect();
    let start = std::iter::once((Selection::Start, dfa.start_state.as_str()))
        .filter(|(_, name)| !name.is_empty());
    let accept = dfa
        .accept_states
        .iter()
        .map(|name| (Selection::Accept, name.as_str()));
    start
        .chain(accept)
        .find(|(_, name)| !state_names.contains(name))
        .map(|(selection, name)| SelectionIssue {
            selection,
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dfa_model::State;

    fn with_selections(start: &str, accept: &[&str]) -> Dfa {
        Dfa {
            states: vec![State::from_parts("S0", "a"), State::from_parts("S1", "b")],
            start_state: start.to_string(),
            accept_states: accept.iter().map(ToString::to_string).collect(),
            ..Dfa::default()
        }
    }

    #[test]
    fn existing_selections_pass() {
        assert_eq!(check(&with_selections("S0", &["S0", "S1"])), None);
        assert_eq!(check(&with_selections("", &[])), None);
    }

    #[test]
    fn start_state_is_checked_first() {
        let issue = check(&with_selections("S9", &["S7"])).expect("issue");
        assert_eq!(issue.selection, Selection::Start);
        assert_eq!(issue.name, "S9");
    }

    #[test]
    fn first_unknown_accept_state_is_named() {
        let issue = check(&with_selections("S0", &["S1", "S7", "S8"])).expect("issue");
        assert_eq!(issue.selection, Selection::Accept);
        assert_eq!(issue.name, "S7");
    }
}
