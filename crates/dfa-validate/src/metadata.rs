//! Application metadata checks.
//!
//! Runs before a DFA is handed to the generation service. The rules match
//! what the service itself enforces, so a request that passes here is not
//! rejected for its metadata.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use dfa_model::ApplicationMetaData;

pub const MAX_APP_NAME_LEN: usize = 30;
pub const MAX_APP_PACKAGE_LEN: usize = 100;
pub const MAX_CONTAINER_REGISTRY_LEN: usize = 100;

static APP_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Invalid app name regex"));

static APP_PACKAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z_]((\.[a-z_])?[a-z0-9_]*)*$").expect("Invalid app package regex")
});

/// A metadata field that the generation service would reject.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    #[error("The application name must not be empty.")]
    AppNameEmpty,

    #[error("The application name must not contain any spaces.")]
    AppNameContainsSpace,

    #[error("The name of the container registry must not contain any spaces.")]
    RegistryContainsSpace,

    #[error(
        "The application name must start with a letter or underscore and contain only letters, digits, and underscores."
    )]
    AppNameInvalid,

    #[error("The application name may be a maximum of {max} characters long.")]
    AppNameTooLong { max: usize },

    #[error("The application package must not be empty.")]
    AppPackageEmpty,

    #[error("The application package must be a lowercase, dot-separated package name.")]
    AppPackageInvalid,

    #[error("The application package may be a maximum of {max} characters long.")]
    AppPackageTooLong { max: usize },

    #[error("The name of the container registry must not be empty.")]
    RegistryEmpty,

    #[error("The name of the container registry may be a maximum of {max} characters long.")]
    RegistryTooLong { max: usize },
}

/// Check application metadata, reporting the first violated rule.
///
/// Text fields are trimmed before checking.
pub fn validate_metadata(metadata: &ApplicationMetaData) -> Result<(), MetadataError> {
    let metadata = metadata.trimmed();
    let app_name = metadata.app_name.as_str();
    let app_package = metadata.app_package.as_str();
    let registry = metadata.container_registry.as_str();

    if app_name.is_empty() {
        return Err(MetadataError::AppNameEmpty);
    }
    if app_name.contains(' ') {
        return Err(MetadataError::AppNameContainsSpace);
    }
    if registry.contains(' ') {
        return Err(MetadataError::RegistryContainsSpace);
    }
    if !APP_NAME_REGEX.is_match(app_name) {
        return Err(MetadataError::AppNameInvalid);
    }
    if app_name.chars().count() > MAX_APP_NAME_LEN {
        return Err(MetadataError::AppNameTooLong {
            max: MAX_APP_NAME_LEN,
        });
    }
    if app_package.is_empty() {
        return Err(MetadataError::AppPackageEmpty);
    }
    if !APP_PACKAGE_REGEX.is_match(app_package) {
        return Err(MetadataError::AppPackageInvalid);
    }
    if app_package.chars().count() > MAX_APP_PACKAGE_LEN {
        return Err(MetadataError::AppPackageTooLong {
            max: MAX_APP_PACKAGE_LEN,
        });
    }
    if registry.is_empty() {
        return Err(MetadataError::RegistryEmpty);
    }
    if registry.chars().count() > MAX_CONTAINER_REGISTRY_LEN {
        return Err(MetadataError::RegistryTooLong {
            max: MAX_CONTAINER_REGISTRY_LEN,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(name: &str, package: &str, registry: &str) -> ApplicationMetaData {
        ApplicationMetaData::new(name, package).with_container_registry(registry)
    }

    #[test]
    fn sample_metadata_is_valid() {
        assert_eq!(
            validate_metadata(&meta("EvenZerosCheck", "samples.evenzeros", "registry")),
            Ok(())
        );
        assert_eq!(
            validate_metadata(&meta(" _App1 ", "a.b_c.d9", "ghcr.io/acme")),
            Ok(())
        );
    }

    #[test]
    fn editor_checks_come_first() {
        assert_eq!(
            validate_metadata(&meta("  ", "bad package", "")),
            Err(MetadataError::AppNameEmpty)
        );
        assert_eq!(
            validate_metadata(&meta("My App", "", "")),
            Err(MetadataError::AppNameContainsSpace)
        );
        assert_eq!(
            validate_metadata(&meta("MyApp", "", "my registry")),
            Err(MetadataError::RegistryContainsSpace)
        );
    }

    #[test]
    fn app_name_pattern_and_length() {
        assert_eq!(
            validate_metadata(&meta("1App", "pkg", "reg")),
            Err(MetadataError::AppNameInvalid)
        );
        assert_eq!(
            validate_metadata(&meta("App-Name", "pkg", "reg")),
            Err(MetadataError::AppNameInvalid)
        );
        let long = "A".repeat(MAX_APP_NAME_LEN + 1);
        assert_eq!(
            validate_metadata(&meta(&long, "pkg", "reg")),
            Err(MetadataError::AppNameTooLong {
                max: MAX_APP_NAME_LEN
            })
        );
    }

    #[test]
    fn app_package_pattern() {
        for bad in ["Samples", "samples..x", "samples.", ".samples", "9lives"] {
            assert_eq!(
                validate_metadata(&meta("App", bad, "reg")),
                Err(MetadataError::AppPackageInvalid),
                "package {bad:?}"
            );
        }
        assert_eq!(
            validate_metadata(&meta("App", "", "reg")),
            Err(MetadataError::AppPackageEmpty)
        );
    }

    #[test]
    fn registry_rules() {
        assert_eq!(
            validate_metadata(&meta("App", "pkg", "")),
            Err(MetadataError::RegistryEmpty)
        );
        let long = "r".repeat(MAX_CONTAINER_REGISTRY_LEN + 1);
        assert_eq!(
            validate_metadata(&meta("App", "pkg", &long)),
            Err(MetadataError::RegistryTooLong {
                max: MAX_CONTAINER_REGISTRY_LEN
            })
        );
    }
}
