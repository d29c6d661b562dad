//! Hand-off of a finished DFA to the application-generation service.
//!
//! The service call itself happens elsewhere. This module builds the request
//! only for a valid DFA with valid metadata, and interprets the response.

use thiserror::Error;
use tracing::{info, warn};

use dfa_model::{ApplicationMetaData, Dfa, GenerationRequest, ValidationError};
use dfa_validate::{MetadataError, diagnose, validate_metadata};

/// Reasons a generation request is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error("{0}")]
    Invalid(ValidationError),
}

impl SubmissionError {
    /// Get a user-friendly message for the error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Metadata(error) => format!("Application settings: {error}"),
            Self::Invalid(error) => format!("The DFA is not complete: {error}"),
        }
    }
}

/// Build the request for `dfa`, refusing invalid metadata or an invalid DFA.
///
/// Metadata is checked first. The request carries the canonical DFA and the
/// trimmed metadata.
pub fn prepare_submission(
    dfa: &Dfa,
    metadata: &ApplicationMetaData,
) -> Result<GenerationRequest, SubmissionError> {
    validate_metadata(metadata)?;
    if let Some(issue) = diagnose(dfa) {
        let error = ValidationError::from(issue);
        warn!(reason = %error, "refusing generation request");
        return Err(SubmissionError::Invalid(error));
    }
    let metadata = metadata.trimmed();
    info!(
        app_name = %metadata.app_name,
        app_package = %metadata.app_package,
        "prepared generation request"
    );
    Ok(GenerationRequest {
        dfa: dfa.clone().into_canonical(),
        application_meta_data: metadata,
    })
}

/// What the generation service answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The generated application, to be saved under `file_name`.
    Archive { file_name: String, bytes: Vec<u8> },

    /// The service rejected the request.
    Failed { status: u16, message: String },
}

impl SubmissionOutcome {
    /// Interpret a response: status 200 carries the archive, anything else
    /// carries error text.
    pub fn from_response(metadata: &ApplicationMetaData, status: u16, body: Vec<u8>) -> Self {
        if status == 200 {
            Self::Archive {
                file_name: metadata.archive_file_name(),
                bytes: body,
            }
        } else {
            let message = String::from_utf8_lossy(&body).into_owned();
            warn!(status, %message, "generation request failed");
            Self::Failed { status, message }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Archive { .. })
    }

    /// Text to show the user for a failed request.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Archive { .. } => None,
            Self::Failed { status, message } => {
                Some(format!("Error, Status: {status}\n\n{message}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::Sample;
    use crate::serialize::from_json;

    #[test]
    fn success_names_archive_after_app() {
        let metadata = ApplicationMetaData::new("EvenZerosCheck", "samples.evenzeros");
        let outcome = SubmissionOutcome::from_response(&metadata, 200, vec![0x50, 0x4b]);
        assert!(outcome.is_success());
        assert_eq!(
            outcome,
            SubmissionOutcome::Archive {
                file_name: "evenzeroscheck.zip".to_string(),
                bytes: vec![0x50, 0x4b],
            }
        );
        assert_eq!(outcome.user_message(), None);
    }

    #[test]
    fn failure_carries_status_and_text() {
        let metadata = ApplicationMetaData::new("App", "pkg");
        let outcome = SubmissionOutcome::from_response(&metadata, 400, b"Invalid DFA".to_vec());
        assert_eq!(
            outcome.user_message().as_deref(),
            Some("Error, Status: 400\n\nInvalid DFA")
        );
    }

    #[test]
    fn metadata_is_checked_before_the_dfa() {
        let err = prepare_submission(&Dfa::default(), &ApplicationMetaData::default()).unwrap_err();
        assert_eq!(err, SubmissionError::Metadata(MetadataError::AppNameEmpty));
    }

    #[test]
    fn incomplete_dfa_is_refused() {
        let metadata =
            ApplicationMetaData::new("App", "pkg").with_container_registry("registry");
        let err = prepare_submission(&Dfa::default(), &metadata).unwrap_err();
        assert_eq!(err.to_string(), "At least one state must be specified.");
        assert!(matches!(
            err,
            SubmissionError::Invalid(ValidationError::StructuralIncompleteness(_))
        ));
    }

    #[test]
    fn dangling_selections_are_refused() {
        let metadata =
            ApplicationMetaData::new("App", "pkg").with_container_registry("registry");
        let mut dfa = from_json(Sample::EvenZeros.json()).expect("sample");
        assert!(prepare_submission(&dfa, &metadata).is_ok());

        dfa.start_state = "S9".to_string();
        dfa.accept_states = vec!["S7".to_string()];
        let err = prepare_submission(&dfa, &metadata).unwrap_err();
        assert_eq!(
            err,
            SubmissionError::Invalid(ValidationError::DanglingReference(
                "The start state S9 does not exist.".to_string()
            ))
        );

        dfa.start_state = "S1".to_string();
        let err = prepare_submission(&dfa, &metadata).unwrap_err();
        assert_eq!(err.to_string(), "The accepting state S7 does not exist.");
    }
}
