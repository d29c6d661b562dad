//! Selectable identifiers for the editor's pickers.
//!
//! The index is a projection of the state and symbol stores. Every picker
//! maps a key to its display label, and the whole index can be rebuilt
//! from the stores at any time.

use std::collections::BTreeMap;
use std::fmt;

use dfa_model::{State, Symbol};

/// A list the user picks identifiers from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Picker {
    CurrentState,
    SubsequentState,
    StartState,
    AcceptStates,
    InputSymbol,
}

impl Picker {
    pub const ALL: [Self; 5] = [
        Self::CurrentState,
        Self::SubsequentState,
        Self::StartState,
        Self::AcceptStates,
        Self::InputSymbol,
    ];

    /// Pickers listing state names.
    pub const STATES: [Self; 4] = [
        Self::CurrentState,
        Self::SubsequentState,
        Self::StartState,
        Self::AcceptStates,
    ];

    /// Whether labels in this picker include the entity description.
    pub const fn shows_description(&self) -> bool {
        matches!(self, Self::StartState | Self::AcceptStates)
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::CurrentState => "current state",
            Self::SubsequentState => "subsequent state",
            Self::StartState => "start state",
            Self::AcceptStates => "accept states",
            Self::InputSymbol => "input symbol",
        }
    }
}

impl fmt::Display for Picker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display label for a key, optionally followed by its description.
pub fn option_label(key: &str, description: Option<&str>) -> String {
    match description {
        Some(description) if !description.is_empty() => format!("{key} - {description}"),
        _ => key.to_string(),
    }
}

/// Per-picker mapping of key to display label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceIndex {
    pickers: BTreeMap<Picker, BTreeMap<String, String>>,
}

impl ReferenceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from the current stores.
    pub fn rebuild<'a>(
        states: impl IntoIterator<Item = &'a State>,
        symbols: impl IntoIterator<Item = &'a Symbol>,
    ) -> Self {
        let mut index = Self::new();
        for state in states {
            index.add_state(state);
        }
        for symbol in symbols {
            index.add_symbol(symbol);
        }
        index
    }

    pub fn add(&mut self, picker: Picker, key: impl Into<String>, label: impl Into<String>) {
        self.pickers
            .entry(picker)
            .or_default()
            .insert(key.into(), label.into());
    }

    /// Relabel an existing option. Returns `false` if the key is not listed.
    pub fn update(&mut self, picker: Picker, key: &str, label: impl Into<String>) -> bool {
        match self.pickers.get_mut(&picker).and_then(|options| options.get_mut(key)) {
            Some(existing) => {
                *existing = label.into();
                true
            }
            None => false,
        }
    }

    /// Drop an option. A picker left without options is dropped too.
    pub fn remove(&mut self, picker: Picker, key: &str) -> bool {
        let Some(options) = self.pickers.get_mut(&picker) else {
            return false;
        };
        let removed = options.remove(key).is_some();
        if options.is_empty() {
            self.pickers.remove(&picker);
        }
        removed
    }

    pub fn clear(&mut self) {
        self.pickers.clear();
    }

    pub fn contains(&self, picker: Picker, key: &str) -> bool {
        self.pickers
            .get(&picker)
            .is_some_and(|options| options.contains_key(key))
    }

    pub fn label(&self, picker: Picker, key: &str) -> Option<&str> {
        self.pickers
            .get(&picker)
            .and_then(|options| options.get(key))
            .map(String::as_str)
    }

    /// Options of a picker as `(key, label)` in ascending key order.
    pub fn options(&self, picker: Picker) -> impl Iterator<Item = (&str, &str)> {
        self.pickers
            .get(&picker)
            .into_iter()
            .flatten()
            .map(|(key, label)| (key.as_str(), label.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.pickers.values().all(BTreeMap::is_empty)
    }

    pub fn add_state(&mut self, state: &State) {
        for picker in Picker::STATES {
            self.add(picker, state.name.as_str(), state_label(picker, state));
        }
    }

    pub fn update_state(&mut self, state: &State) {
        for picker in Picker::STATES {
            self.update(picker, state.name.as_str(), state_label(picker, state));
        }
    }

    pub fn remove_state(&mut self, name: &str) {
        for picker in Picker::STATES {
            self.remove(picker, name);
        }
    }

    pub fn add_symbol(&mut self, symbol: &Symbol) {
        let key = symbol.character.to_string();
        self.add(Picker::InputSymbol, key.clone(), key);
    }

    pub fn remove_symbol(&mut self, character: &str) {
        self.remove(Picker::InputSymbol, character);
    }
}

fn state_label(picker: Picker, state: &State) -> String {
    let description = picker
        .shows_description()
        .then_some(state.description.as_str());
    option_label(state.name.as_str(), description)
}
