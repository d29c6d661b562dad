use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use dfa_editor::{Editor, EditorOptions, LoadOutcome, Sample, Suggestion, request_to_json};
use dfa_model::ApplicationMetaData;

use crate::types::{SuggestKind, TransitionRow, ValidateReport};

/// Read a document into a fresh editor.
pub fn load_document(path: &Path, options: &EditorOptions) -> Result<(Editor, LoadOutcome)> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let mut editor = Editor::with_options(options.clone());
    let outcome = editor
        .load_json(&text)
        .map_err(|error| {
            let message = error.user_message();
            anyhow::Error::new(error).context(message)
        })
        .with_context(|| format!("parse {}", path.display()))?;
    Ok((editor, outcome))
}

pub fn run_validate(path: &Path, options: &EditorOptions) -> Result<ValidateReport> {
    let span = info_span!("validate", path = %path.display());
    let _guard = span.enter();
    let (editor, outcome) = load_document(path, options)?;
    let rows = editor
        .transitions()
        .cloned()
        .zip(editor.transition_rows().iter().cloned())
        .map(|(transition, check)| TransitionRow { transition, check })
        .collect();
    Ok(ValidateReport {
        path: path.to_path_buf(),
        issue: editor.diagnose(),
        rows,
        dropped_selections: outcome.dropped_selections,
    })
}

/// Re-emit a document in canonical form, writing it to `output` if given.
pub fn run_format(path: &Path, output: Option<&Path>, options: &EditorOptions) -> Result<String> {
    let (editor, _) = load_document(path, options)?;
    let text = editor.to_json().context("serialize document")?;
    if let Some(output) = output {
        fs::write(output, format!("{text}\n"))
            .with_context(|| format!("write {}", output.display()))?;
        info!(path = %output.display(), "wrote canonical document");
    }
    Ok(text)
}

pub fn run_suggest(
    path: &Path,
    kind: SuggestKind,
    options: &EditorOptions,
) -> Result<Option<Suggestion>> {
    let (editor, _) = load_document(path, options)?;
    Ok(match kind {
        SuggestKind::State => editor.suggest_state(),
        SuggestKind::Symbol => editor.suggest_symbol(),
    })
}

/// A bundled sample in canonical form.
pub fn run_sample(sample: Sample) -> Result<String> {
    let mut editor = Editor::new();
    editor
        .load_sample(sample)
        .with_context(|| format!("load sample {sample}"))?;
    Ok(editor.to_json()?)
}

/// Build the generation request body for a document.
///
/// Fails with the gate's message when the metadata or the DFA is invalid.
pub fn run_request(
    path: &Path,
    metadata: &ApplicationMetaData,
    options: &EditorOptions,
) -> Result<String> {
    let (editor, _) = load_document(path, options)?;
    let request = editor.prepare_submission(metadata).map_err(|error| {
        let message = error.user_message();
        anyhow::Error::new(error).context(message)
    })?;
    Ok(request_to_json(&request)?)
}
