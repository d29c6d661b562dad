//! The editing session.
//!
//! [`Editor`] owns the stores and the picker index and keeps them in step:
//! every mutation updates the store, then the index, then re-checks the
//! transitions. Validation is advisory and never blocks an edit.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use dfa_model::{
    ApplicationMetaData, Dfa, GenerationRequest, ParseError, State, StateName, Symbol,
    SymbolChar, Transition, ValidationError,
};
use dfa_validate::{Issue, TransitionCheck, TransitionFlags, check_transition_rows};

use crate::index::{Picker, ReferenceIndex};
use crate::naming::Suggestion;
use crate::options::EditorOptions;
use crate::samples::Sample;
use crate::serialize;
use crate::store::{StateStore, SymbolStore, TransitionStore, Upserted};
use crate::submit::{SubmissionError, prepare_submission};

/// An entity addressed by its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef<'a> {
    State(&'a str),
    Symbol(char),
    Transition {
        current_state: &'a str,
        input_symbol: &'a str,
    },
}

/// Copy of a stored entity, used to pre-fill an edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditDraft {
    State(State),
    Symbol(Symbol),
    Transition(Transition),
}

/// Result of loading a document into the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Validation message for the loaded automaton, if any.
    pub message: Option<String>,

    /// Start or accept states named by the document that are not states.
    pub dropped_selections: Vec<String>,
}

/// An in-memory DFA under construction.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    options: EditorOptions,
    states: StateStore,
    symbols: SymbolStore,
    transitions: TransitionStore,
    index: ReferenceIndex,
    start_state: Option<String>,
    accept_states: BTreeSet<String>,
    description: String,
    rows: Vec<TransitionCheck>,
    flags: TransitionFlags,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    // -- States ------------------------------------------------------------

    /// Add a state or update the description of an existing one.
    pub fn upsert_state(
        &mut self,
        name: &str,
        description: &str,
    ) -> Result<Upserted, ValidationError> {
        let state = State::from_parts(name, description);
        let outcome = self.states.upsert(state.clone())?;
        match outcome {
            Upserted::Added => self.index.add_state(&state),
            Upserted::Updated => self.index.update_state(&state),
        }
        debug!(state = %state.name, ?outcome, "state upserted");
        self.refresh();
        Ok(outcome)
    }

    /// Remove a state. Transitions that use it are kept and become dangling.
    pub fn remove_state(&mut self, name: &str) -> Option<State> {
        let removed = self.states.remove(&StateName::unchecked(name))?;
        let name = removed.name.as_str();
        self.index.remove_state(name);
        if self.start_state.as_deref() == Some(name) {
            self.start_state = None;
        }
        self.accept_states.remove(name);
        debug!(state = name, "state removed");
        self.refresh();
        Some(removed)
    }

    // -- Symbols -----------------------------------------------------------

    /// Add a symbol or update the description of an existing one.
    pub fn upsert_symbol(
        &mut self,
        character: &str,
        description: &str,
    ) -> Result<Upserted, ValidationError> {
        let symbol = Symbol::new(character, description)?;
        let outcome = self.symbols.upsert(symbol.clone())?;
        if outcome == Upserted::Added {
            self.index.add_symbol(&symbol);
        }
        debug!(symbol = %symbol.character, ?outcome, "symbol upserted");
        self.refresh();
        Ok(outcome)
    }

    /// Remove a symbol. Transitions that read it are kept and become dangling.
    pub fn remove_symbol(&mut self, character: char) -> Option<Symbol> {
        let removed = self.symbols.remove(&SymbolChar::from_char(character))?;
        self.index.remove_symbol(&removed.character.to_string());
        debug!(symbol = %removed.character, "symbol removed");
        self.refresh();
        Some(removed)
    }

    // -- Transitions -------------------------------------------------------

    /// Add a transition or update the target and description of an existing one.
    pub fn upsert_transition(
        &mut self,
        current_state: &str,
        input_symbol: &str,
        subsequent_state: &str,
        description: &str,
    ) -> Result<Upserted, ValidationError> {
        let transition =
            Transition::new(current_state, input_symbol, subsequent_state, description);
        let outcome = self.transitions.upsert(transition)?;
        debug!(
            current_state,
            input_symbol,
            subsequent_state,
            ?outcome,
            "transition upserted"
        );
        self.refresh();
        Ok(outcome)
    }

    pub fn remove_transition(
        &mut self,
        current_state: &str,
        input_symbol: &str,
    ) -> Option<Transition> {
        let removed = self.transitions.remove_pair(current_state, input_symbol)?;
        debug!(current_state, input_symbol, "transition removed");
        self.refresh();
        Some(removed)
    }

    // -- Edit and remove by key --------------------------------------------

    /// Copy of the addressed entity, or `None` if it does not exist.
    pub fn begin_edit(&self, target: EntityRef<'_>) -> Option<EditDraft> {
        match target {
            EntityRef::State(name) => self
                .states
                .get(&StateName::unchecked(name))
                .cloned()
                .map(EditDraft::State),
            EntityRef::Symbol(character) => self
                .symbols
                .get(&SymbolChar::from_char(character))
                .cloned()
                .map(EditDraft::Symbol),
            EntityRef::Transition {
                current_state,
                input_symbol,
            } => self
                .transitions
                .get_pair(current_state, input_symbol)
                .cloned()
                .map(EditDraft::Transition),
        }
    }

    /// Remove the addressed entity. Returns `false` if it did not exist.
    pub fn remove(&mut self, target: EntityRef<'_>) -> bool {
        match target {
            EntityRef::State(name) => self.remove_state(name).is_some(),
            EntityRef::Symbol(character) => self.remove_symbol(character).is_some(),
            EntityRef::Transition {
                current_state,
                input_symbol,
            } => self.remove_transition(current_state, input_symbol).is_some(),
        }
    }

    // -- Selections --------------------------------------------------------

    /// Select the start state. An empty name clears the selection.
    pub fn set_start_state(&mut self, name: &str) -> Result<(), ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            self.start_state = None;
            return Ok(());
        }
        self.ensure_selectable(Picker::StartState, name)?;
        self.start_state = Some(name.to_string());
        debug!(state = name, "start state selected");
        Ok(())
    }

    /// Replace the accept states. Nothing changes if any name is not a state.
    pub fn set_accept_states<I, S>(&mut self, names: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selected = BTreeSet::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            self.ensure_selectable(Picker::AcceptStates, name)?;
            selected.insert(name.to_string());
        }
        debug!(count = selected.len(), "accept states selected");
        self.accept_states = selected;
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    fn ensure_selectable(&self, picker: Picker, name: &str) -> Result<(), ValidationError> {
        if self.index.contains(picker, name) {
            Ok(())
        } else {
            Err(ValidationError::DanglingReference(format!(
                "The state {name} does not exist."
            )))
        }
    }

    // -- Reads -------------------------------------------------------------

    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.states.list()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.list()
    }

    pub fn transitions(&self) -> impl Iterator<Item = &Transition> {
        self.transitions.list()
    }

    pub fn start_state(&self) -> Option<&str> {
        self.start_state.as_deref()
    }

    pub fn accept_states(&self) -> impl Iterator<Item = &str> {
        self.accept_states.iter().map(String::as_str)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn index(&self) -> &ReferenceIndex {
        &self.index
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty() && self.symbols.is_empty() && self.transitions.is_empty()
    }

    // -- Validation --------------------------------------------------------

    /// Dangling-reference flags as of the last mutation.
    pub fn transition_flags(&self) -> TransitionFlags {
        self.flags
    }

    /// Per-transition membership checks as of the last mutation, in
    /// transition order.
    pub fn transition_rows(&self) -> &[TransitionCheck] {
        &self.rows
    }

    pub fn diagnose(&self) -> Option<Issue> {
        dfa_validate::diagnose(&self.to_dfa())
    }

    pub fn validate(&self) -> Option<String> {
        self.diagnose().map(|issue| issue.message())
    }

    fn refresh(&mut self) {
        self.rows = check_transition_rows(
            self.states.list(),
            self.symbols.list(),
            self.transitions.list(),
        );
        self.flags = self
            .rows
            .iter()
            .map(TransitionCheck::flags)
            .fold(TransitionFlags::default(), TransitionFlags::merge);
        if self.flags.any() {
            debug!(flags = ?self.flags, "transitions reference missing entities");
        }
    }

    // -- Document ----------------------------------------------------------

    /// Snapshot of the automaton in canonical order.
    pub fn to_dfa(&self) -> Dfa {
        Dfa {
            alphabet: self.symbols.list().cloned().collect(),
            states: self.states.list().cloned().collect(),
            transitions: self.transitions.list().cloned().collect(),
            start_state: self.start_state.clone().unwrap_or_default(),
            accept_states: self.accept_states.iter().cloned().collect(),
            description: self.description.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serialize::to_json(&self.to_dfa())
    }

    /// Replace the session with `dfa`.
    ///
    /// Entities are taken as-is, even when they break the rules an edit
    /// would enforce. Start and accept states are trimmed like the setters
    /// do and kept only if they name a state.
    pub fn load(&mut self, dfa: Dfa) -> LoadOutcome {
        self.clear_entities();
        self.states = dfa.states.into_iter().collect();
        self.symbols = dfa.alphabet.into_iter().collect();
        self.transitions = dfa.transitions.into_iter().collect();
        self.index = ReferenceIndex::rebuild(self.states.list(), self.symbols.list());
        self.refresh();

        let mut dropped_selections = Vec::new();
        let start_state = dfa.start_state.trim();
        if !start_state.is_empty() {
            if self.index.contains(Picker::StartState, start_state) {
                self.start_state = Some(start_state.to_string());
            } else {
                dropped_selections.push(start_state.to_string());
            }
        }
        for name in &dfa.accept_states {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            if self.index.contains(Picker::AcceptStates, name) {
                self.accept_states.insert(name.to_string());
            } else {
                dropped_selections.push(name.to_string());
            }
        }
        self.description = dfa.description;

        let message = self.validate();
        info!(
            states = self.states.len(),
            symbols = self.symbols.len(),
            transitions = self.transitions.len(),
            "dfa loaded"
        );
        if !dropped_selections.is_empty() {
            warn!(?dropped_selections, "selections name states that do not exist");
        }
        if let Some(message) = &message {
            warn!(%message, "loaded dfa is not valid");
        }
        LoadOutcome {
            message,
            dropped_selections,
        }
    }

    /// Parse `text` and replace the session with it.
    ///
    /// The session is unchanged when parsing fails.
    pub fn load_json(&mut self, text: &str) -> Result<LoadOutcome, ParseError> {
        let dfa = serialize::from_json(text)?;
        Ok(self.load(dfa))
    }

    pub fn load_sample(&mut self, sample: Sample) -> Result<LoadOutcome, ParseError> {
        self.load_json(sample.json())
    }

    /// Remove everything, including the description.
    pub fn clear(&mut self) {
        self.clear_entities();
        info!("dfa cleared");
    }

    /// Remove everything and restore the default description.
    pub fn reset(&mut self) {
        self.clear_entities();
        self.description = self.options.default_description.clone();
        info!("dfa reset");
    }

    fn clear_entities(&mut self) {
        self.states.clear();
        self.symbols.clear();
        self.transitions.clear();
        self.index.clear();
        self.start_state = None;
        self.accept_states.clear();
        self.description.clear();
        self.rows.clear();
        self.flags = TransitionFlags::default();
    }

    // -- Suggestions -------------------------------------------------------

    /// Next unused state name, or `None` when the naming rule is exhausted.
    pub fn suggest_state(&self) -> Option<Suggestion> {
        self.options
            .state_naming
            .suggest(|name| self.states.contains(&StateName::unchecked(name)))
    }

    /// Next unused symbol character, or `None` when the naming rule is exhausted.
    pub fn suggest_symbol(&self) -> Option<Suggestion> {
        self.options.symbol_naming.suggest(|key| {
            SymbolChar::parse(key)
                .ok()
                .is_none_or(|character| self.symbols.contains(&character))
        })
    }

    // -- Submission --------------------------------------------------------

    /// Build the generation request for the current automaton.
    pub fn prepare_submission(
        &self,
        metadata: &ApplicationMetaData,
    ) -> Result<GenerationRequest, SubmissionError> {
        prepare_submission(&self.to_dfa(), metadata)
    }
}
