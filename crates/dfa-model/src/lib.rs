//! Data model for DFA specifications.
//!
//! The types here mirror the canonical JSON document consumed by the
//! application-generation service. Key newtypes live in [`ids`]; editing
//! rules for each entity live on the entity types in [`entity`].

pub mod dfa;
pub mod entity;
pub mod error;
pub mod ids;
pub mod metadata;

pub use dfa::Dfa;
pub use entity::{MAX_DESCRIPTION_LEN, State, Symbol, Transition, TransitionKey};
pub use error::{EntityKind, ParseError, Result, ValidationError};
pub use ids::{MAX_STATE_NAME_LEN, StateName, SymbolChar};
pub use metadata::{ApplicationMetaData, GenerationRequest, MessagingType, StorageType};
