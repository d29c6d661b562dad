//! Keyed entity collections with upsert semantics.
//!
//! Entries live in a `BTreeMap`, so iteration is always in ascending key
//! order and reflects the latest committed mutation.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

use tracing::debug;

use dfa_model::{
    EntityKind, State, StateName, Symbol, SymbolChar, Transition, TransitionKey, ValidationError,
};

/// An entity that can be kept in an [`EntityStore`].
pub trait Entity: Clone {
    type Key: Ord + Clone + fmt::Debug;

    const KIND: EntityKind;

    fn key(&self) -> Self::Key;

    /// Rules for inserting a key that is not yet stored.
    fn validate_new(&self) -> Result<(), ValidationError>;

    /// Rules for overwriting the non-key fields of a stored entity.
    fn validate_update(&self) -> Result<(), ValidationError>;

    /// Copy the non-key fields of `other` into `self`.
    fn apply_update(&mut self, other: Self);
}

impl Entity for State {
    type Key = StateName;
    const KIND: EntityKind = EntityKind::State;

    fn key(&self) -> StateName {
        self.name.clone()
    }

    fn validate_new(&self) -> Result<(), ValidationError> {
        State::validate_new(self)
    }

    fn validate_update(&self) -> Result<(), ValidationError> {
        State::validate_update(self)
    }

    fn apply_update(&mut self, other: Self) {
        self.description = other.description;
    }
}

impl Entity for Symbol {
    type Key = SymbolChar;
    const KIND: EntityKind = EntityKind::Symbol;

    fn key(&self) -> SymbolChar {
        self.character
    }

    fn validate_new(&self) -> Result<(), ValidationError> {
        Symbol::validate_new(self)
    }

    fn validate_update(&self) -> Result<(), ValidationError> {
        Symbol::validate_update(self)
    }

    fn apply_update(&mut self, other: Self) {
        self.description = other.description;
    }
}

impl Entity for Transition {
    type Key = TransitionKey;
    const KIND: EntityKind = EntityKind::Transition;

    fn key(&self) -> TransitionKey {
        Transition::key(self)
    }

    fn validate_new(&self) -> Result<(), ValidationError> {
        Transition::validate_new(self)
    }

    fn validate_update(&self) -> Result<(), ValidationError> {
        Transition::validate_update(self)
    }

    fn apply_update(&mut self, other: Self) {
        self.subsequent_state_name = other.subsequent_state_name;
        self.description = other.description;
    }
}

/// Whether an upsert inserted a new key or overwrote an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upserted {
    Added,
    Updated,
}

/// A collection of entities keyed by their primary key.
#[derive(Debug, Clone)]
pub struct EntityStore<E: Entity> {
    entries: BTreeMap<E::Key, E>,
}

pub type StateStore = EntityStore<State>;
pub type SymbolStore = EntityStore<Symbol>;
pub type TransitionStore = EntityStore<Transition>;

impl<E: Entity> Default for EntityStore<E> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<E: Entity> EntityStore<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entity`, or overwrite the non-key fields of the stored entity
    /// with the same key.
    ///
    /// The store is unchanged when the applicable rule fails.
    pub fn upsert(&mut self, entity: E) -> dfa_model::Result<Upserted> {
        let result = match self.entries.entry(entity.key()) {
            Entry::Occupied(mut slot) => entity.validate_update().map(|()| {
                slot.get_mut().apply_update(entity);
                Upserted::Updated
            }),
            Entry::Vacant(slot) => entity.validate_new().map(|()| {
                slot.insert(entity);
                Upserted::Added
            }),
        };
        if let Err(error) = &result {
            debug!(entity = %E::KIND, %error, "upsert rejected");
        }
        result
    }

    /// Store `entity` as-is, replacing any entity with the same key.
    ///
    /// Used when loading a document, where rule violations are shown to the
    /// user for correction rather than rejected.
    pub fn restore(&mut self, entity: E) -> Option<E> {
        self.entries.insert(entity.key(), entity)
    }

    pub fn remove(&mut self, key: &E::Key) -> Option<E> {
        self.entries.remove(key)
    }

    pub fn get(&self, key: &E::Key) -> Option<&E> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &E::Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Entities in ascending key order.
    pub fn list(&self) -> impl Iterator<Item = &E> {
        self.entries.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &E::Key> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl TransitionStore {
    pub fn get_pair(&self, current_state: &str, input_symbol: &str) -> Option<&Transition> {
        self.get(&TransitionKey::new(current_state, input_symbol))
    }

    pub fn remove_pair(&mut self, current_state: &str, input_symbol: &str) -> Option<Transition> {
        self.remove(&TransitionKey::new(current_state, input_symbol))
    }
}

impl<E: Entity> FromIterator<E> for EntityStore<E> {
    /// Collect entities as-is; later duplicates of a key win.
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut store = Self::new();
        for entity in iter {
            store.restore(entity);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_key_upsert_keeps_one_entry_with_latest_description() {
        let mut store = StateStore::new();
        assert_eq!(store.upsert(State::from_parts("S1", "First.")), Ok(Upserted::Added));
        assert_eq!(
            store.upsert(State::from_parts("S1", "Second.")),
            Ok(Upserted::Updated)
        );
        assert_eq!(store.len(), 1);
        let key = StateName::unchecked("S1");
        assert_eq!(store.get(&key).map(|s| s.description.as_str()), Some("Second."));
    }

    #[test]
    fn failed_upsert_leaves_store_unchanged() {
        let mut store = StateStore::new();
        store.upsert(State::from_parts("S1", "First.")).expect("add");

        let err = store.upsert(State::from_parts("S1", "")).unwrap_err();
        assert_eq!(err.to_string(), "Please provide a description for the state.");
        let err = store.upsert(State::from_parts("TOOLONGNAME", "x")).unwrap_err();
        assert!(matches!(err, ValidationError::LengthViolation { .. }));

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get(&StateName::unchecked("S1")).map(|s| s.description.as_str()),
            Some("First.")
        );
    }

    #[test]
    fn list_is_sorted_by_key() {
        let mut store = SymbolStore::new();
        for c in ['b', '1', 'a'] {
            store.upsert(Symbol::from_parts(c, "sym")).expect("add");
        }
        let order: Vec<char> = store.list().map(|s| s.character.as_char()).collect();
        assert_eq!(order, vec!['1', 'a', 'b']);
    }

    #[test]
    fn transition_update_overwrites_target_and_description() {
        let mut store = TransitionStore::new();
        store
            .upsert(Transition::new("S1", "0", "S2", "Old."))
            .expect("add");
        assert_eq!(
            store.upsert(Transition::new("S1", "0", "S1", "New.")),
            Ok(Upserted::Updated)
        );
        assert_eq!(store.len(), 1);
        let transition = store.get_pair("S1", "0").expect("present");
        assert_eq!(transition.subsequent_state_name, "S1");
        assert_eq!(transition.description, "New.");
    }

    #[test]
    fn transition_add_needs_all_endpoints() {
        let mut store = TransitionStore::new();
        let err = store.upsert(Transition::new("S1", "0", "", "")).unwrap_err();
        assert_eq!(err.entity(), Some(EntityKind::Transition));
        assert!(store.is_empty());
    }

    #[test]
    fn remove_reports_absence() {
        let mut store = TransitionStore::new();
        store.upsert(Transition::new("S1", "0", "S2", "")).expect("add");
        assert!(store.remove_pair("S1", "1").is_none());
        assert!(store.remove_pair("S1", "0").is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn restore_accepts_invalid_entities() {
        let store: StateStore = [
            State::from_parts("LONGSTATENAME", ""),
            State::from_parts("S1", "a"),
            State::from_parts("S1", "b"),
        ]
        .into_iter()
        .collect();
        assert_eq!(store.len(), 2);
        assert!(store.contains(&StateName::unchecked("LONGSTATENAME")));
        assert_eq!(
            store.get(&StateName::unchecked("S1")).map(|s| s.description.as_str()),
            Some("b")
        );
    }
}
