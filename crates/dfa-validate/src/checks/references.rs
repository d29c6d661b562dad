//! Referential integrity of transitions.
//!
//! Every transition's current and subsequent state must name an existing
//! state, and its input symbol an existing symbol.

use std::collections::BTreeSet;

use dfa_model::{State, Symbol, Transition, TransitionKey};

use crate::issue::TransitionFlags;

/// Membership results for a single transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionCheck {
    pub key: TransitionKey,
    pub initial_state_exists: bool,
    pub input_symbol_exists: bool,
    pub subsequent_state_exists: bool,
}

impl TransitionCheck {
    pub fn is_valid(&self) -> bool {
        self.initial_state_exists && self.input_symbol_exists && self.subsequent_state_exists
    }

    pub fn flags(&self) -> TransitionFlags {
        TransitionFlags {
            missing_initial_state: !self.initial_state_exists,
            missing_subsequent_state: !self.subsequent_state_exists,
            missing_input_symbol: !self.input_symbol_exists,
        }
    }
}

/// Check every transition against the given states and symbols.
///
/// Rows come back in the order the transitions were supplied.
pub fn check_transition_rows<'a, S, Y, T>(
    states: S,
    symbols: Y,
    transitions: T,
) -> Vec<TransitionCheck>
where
    S: IntoIterator<Item = &'a State>,
    Y: IntoIterator<Item = &'a Symbol>,
    T: IntoIterator<Item = &'a Transition>,
{
    let state_names: BTreeSet<&str> = states.into_iter().map(|s| s.name.as_str()).collect();
    let symbol_chars: BTreeSet<char> = symbols
        .into_iter()
        .map(|s| s.character.as_char())
        .collect();
    let symbol_exists = |value: &str| {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => symbol_chars.contains(&c),
            _ => false,
        }
    };

    transitions
        .into_iter()
        .map(|transition| TransitionCheck {
            key: transition.key(),
            initial_state_exists: state_names.contains(transition.current_state_name.as_str()),
            input_symbol_exists: symbol_exists(&transition.input_symbol),
            subsequent_state_exists: state_names
                .contains(transition.subsequent_state_name.as_str()),
        })
        .collect()
}

/// Check every transition and OR the results into one set of flags.
pub fn check_transitions<'a, S, Y, T>(states: S, symbols: Y, transitions: T) -> TransitionFlags
where
    S: IntoIterator<Item = &'a State>,
    Y: IntoIterator<Item = &'a Symbol>,
    T: IntoIterator<Item = &'a Transition>,
{
    check_transition_rows(states, symbols, transitions)
        .iter()
        .map(TransitionCheck::flags)
        .fold(TransitionFlags::default(), TransitionFlags::merge)
}
