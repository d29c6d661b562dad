//! Structural completeness checks.
//!
//! A DFA needs states, symbols, transitions, a start state, and at least
//! one accept state. Only the first missing part is reported.

use dfa_model::Dfa;

use crate::issue::StructuralIssue;

/// Return the first structural precondition the DFA fails.
pub fn check(dfa: &Dfa) -> Option<StructuralIssue> {
    if dfa.states.is_empty() {
        return Some(StructuralIssue::NoStates);
    }
    if dfa.alphabet.is_empty() {
        return Some(StructuralIssue::NoSymbols);
    }
    if dfa.transitions.is_empty() {
        return Some(StructuralIssue::NoTransitions);
    }
    if dfa.start_state.is_empty() {
        return Some(StructuralIssue::NoStartState);
    }
    if dfa.accept_states.is_empty() {
        return Some(StructuralIssue::NoAcceptStates);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use dfa_model::{State, Symbol, Transition};

    fn complete() -> Dfa {
        Dfa {
            alphabet: vec![Symbol::from_parts('a', "A.")],
            states: vec![State::from_parts("S0", "Start.")],
            transitions: vec![Transition::new("S0", "a", "S0", "")],
            start_state: "S0".to_string(),
            accept_states: vec!["S0".to_string()],
            description: String::new(),
        }
    }

    #[test]
    fn complete_dfa_passes() {
        assert_eq!(check(&complete()), None);
    }

    #[test]
    fn first_failure_wins() {
        assert_eq!(check(&Dfa::default()), Some(StructuralIssue::NoStates));

        let mut dfa = complete();
        dfa.alphabet.clear();
        dfa.transitions.clear();
        assert_eq!(check(&dfa), Some(StructuralIssue::NoSymbols));

        let mut dfa = complete();
        dfa.transitions.clear();
        assert_eq!(check(&dfa), Some(StructuralIssue::NoTransitions));

        let mut dfa = complete();
        dfa.start_state.clear();
        dfa.accept_states.clear();
        assert_eq!(check(&dfa), Some(StructuralIssue::NoStartState));

        let mut dfa = complete();
        dfa.accept_states.clear();
        assert_eq!(check(&dfa), Some(StructuralIssue::NoAcceptStates));
    }
}
