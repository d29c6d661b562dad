//! Editor options from a TOML file.
//!
//! ```toml
//! default_description = "Deterministic Finite Automaton."
//!
//! [state_naming]
//! prefix = "S"
//! start = "0"
//! description_template = "State {suffix}."
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use dfa_editor::EditorOptions;

/// Load options from `path`, or the defaults when no path is given.
pub fn load_options(path: Option<&Path>) -> Result<EditorOptions> {
    let Some(path) = path else {
        return Ok(EditorOptions::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    let options = parse_options(&text)
        .with_context(|| format!("parse config file {}", path.display()))?;
    debug!(path = %path.display(), "loaded editor options");
    Ok(options)
}

pub fn parse_options(text: &str) -> Result<EditorOptions> {
    Ok(toml::from_str(text)?)
}
