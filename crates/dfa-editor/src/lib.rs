//! Incremental authoring of DFA specifications.
//!
//! The [`Editor`] applies add, update, and remove edits to states, symbols,
//! and transitions, keeps the picker index in step, re-checks references
//! after each edit, and reads and writes the canonical JSON document.

mod editor;
pub mod index;
pub mod naming;
mod options;
pub mod samples;
pub mod serialize;
pub mod store;
mod submit;

pub use editor::{EditDraft, Editor, EntityRef, LoadOutcome};
pub use index::{Picker, ReferenceIndex};
pub use naming::{NamingRule, Suggestion, next_identifier, successor};
pub use options::{DEFAULT_DESCRIPTION, EditorOptions};
pub use samples::Sample;
pub use serialize::{from_json, request_to_json, to_json};
pub use store::{Entity, EntityStore, StateStore, SymbolStore, TransitionStore, Upserted};
pub use submit::{SubmissionError, SubmissionOutcome, prepare_submission};
