//! Canonical JSON form of a DFA document.
//!
//! Output keys follow the field order of [`Dfa`], arrays are sorted by
//! primary key, and the text is pretty-printed with two-space indentation.

use dfa_model::{Dfa, GenerationRequest, ParseError};

/// Render `dfa` in canonical form.
pub fn to_json(dfa: &Dfa) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&dfa.clone().into_canonical())
}

/// Parse a DFA document and bring it into canonical order.
///
/// All six top-level keys are required.
pub fn from_json(text: &str) -> Result<Dfa, ParseError> {
    serde_json::from_str::<Dfa>(text)
        .map(Dfa::into_canonical)
        .map_err(|error| ParseError::MalformedDocument {
            line: error.line(),
            column: error.column(),
            reason: error.to_string(),
        })
}

/// Render the request sent to the generation service.
pub fn request_to_json(request: &GenerationRequest) -> serde_json::Result<String> {
    serde_json::to_string_pretty(request)
}
