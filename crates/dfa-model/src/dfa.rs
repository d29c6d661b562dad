use serde::{Deserialize, Serialize};

use crate::entity::{State, Symbol, Transition};
use crate::ids::{state_ref, state_refs};

/// A complete DFA specification, as exchanged with the generation service.
///
/// Field order is the canonical document key order. Start and accept states
/// are plain names and may be empty or dangling; see `dfa-validate`. Every
/// state name is trimmed on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dfa {
    pub alphabet: Vec<Symbol>,
    pub states: Vec<State>,
    pub transitions: Vec<Transition>,
    #[serde(deserialize_with = "state_ref")]
    pub start_state: String,
    #[serde(deserialize_with = "state_refs")]
    pub accept_states: Vec<String>,
    pub description: String,
}

impl Dfa {
    /// Sort every collection into canonical order.
    ///
    /// States order by name, then description; symbols by character;
    /// transitions by `(current state, input symbol)`. Accept states are
    /// sorted and deduplicated.
    pub fn canonicalize(&mut self) {
        self.alphabet.sort_by(|a, b| {
            a.character
                .cmp(&b.character)
                .then_with(|| a.description.cmp(&b.description))
        });
        self.states.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.description.cmp(&b.description))
        });
        self.transitions.sort_by_key(Transition::key);
        self.accept_states.sort();
        self.accept_states.dedup();
    }

    /// Consume and return the canonical form.
    #[must_use]
    pub fn into_canonical(mut self) -> Self {
        self.canonicalize();
        self
    }

    pub fn has_state(&self, name: &str) -> bool {
        self.states.iter().any(|state| state.name.as_str() == name)
    }

    pub fn has_symbol(&self, symbol: &str) -> bool {
        self.alphabet
            .iter()
            .any(|candidate| candidate.character.matches(symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_sorts_every_collection() {
        let dfa = Dfa {
            alphabet: vec![Symbol::from_parts('1', "one"), Symbol::from_parts('0', "zero")],
            states: vec![State::from_parts("S2", "b"), State::from_parts("S1", "a")],
            transitions: vec![
                Transition::new("S2", "0", "S1", ""),
                Transition::new("S1", "1", "S1", ""),
                Transition::new("S1", "0", "S2", ""),
            ],
            start_state: "S1".to_string(),
            accept_states: vec!["S2".to_string(), "S1".to_string(), "S2".to_string()],
            description: String::new(),
        }
        .into_canonical();

        let symbols: Vec<char> = dfa.alphabet.iter().map(|s| s.character.as_char()).collect();
        assert_eq!(symbols, vec!['0', '1']);
        let states: Vec<&str> = dfa.states.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(states, vec!["S1", "S2"]);
        let keys: Vec<(&str, &str)> = dfa
            .transitions
            .iter()
            .map(|t| (t.current_state_name.as_str(), t.input_symbol.as_str()))
            .collect();
        assert_eq!(keys, vec![("S1", "0"), ("S1", "1"), ("S2", "0")]);
        assert_eq!(dfa.accept_states, vec!["S1", "S2"]);
    }

    #[test]
    fn lookups() {
        let dfa = Dfa {
            alphabet: vec![Symbol::from_parts('a', "A")],
            states: vec![State::from_parts("S0", "start")],
            ..Dfa::default()
        };
        assert!(dfa.has_state("S0"));
        assert!(!dfa.has_state("S1"));
        assert!(dfa.has_symbol("a"));
        assert!(!dfa.has_symbol("aa"));
    }
}
