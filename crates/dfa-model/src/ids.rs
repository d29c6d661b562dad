use std::fmt;

use crate::error::{EntityKind, ValidationError};

/// Maximum number of characters in a state name.
pub const MAX_STATE_NAME_LEN: usize = 8;

pub(crate) const STATE_NAME_REQUIRED: &str =
    "Please provide a name and a description for the state.";
pub(crate) const SYMBOL_REQUIRED: &str =
    "Please enter a character and a description for the symbol.";

/// Primary key of a state.
///
/// Names are trimmed on every path in. `new` also enforces the naming rules;
/// deserialization does not, so that a document with an overlong name can
/// still be loaded and corrected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct StateName(String);

impl StateName {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let name = Self::unchecked(value);
        name.check()?;
        Ok(name)
    }

    /// Wrap a trimmed name without applying the naming rules.
    pub fn unchecked(value: impl Into<String>) -> Self {
        let value = value.into();
        Self(value.trim().to_string())
    }

    pub(crate) fn check(&self) -> Result<(), ValidationError> {
        if self.0.is_empty() {
            return Err(ValidationError::MissingRequiredField {
                entity: EntityKind::State,
                message: STATE_NAME_REQUIRED,
            });
        }
        if self.0.chars().count() > MAX_STATE_NAME_LEN {
            return Err(ValidationError::LengthViolation {
                entity: EntityKind::State,
                message: format!(
                    "The name of the state may be a maximum of {MAX_STATE_NAME_LEN} characters long."
                ),
            });
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> serde::Deserialize<'de> for StateName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <String as serde::Deserialize>::deserialize(deserializer).map(Self::unchecked)
    }
}

/// Deserialize a reference to a state, trimmed like a [`StateName`].
pub(crate) fn state_ref<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    <StateName as serde::Deserialize>::deserialize(deserializer).map(StateName::into_string)
}

/// Deserialize a list of state references, each trimmed like a [`StateName`].
pub(crate) fn state_refs<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    <Vec<StateName> as serde::Deserialize>::deserialize(deserializer)
        .map(|names| names.into_iter().map(StateName::into_string).collect())
}

impl fmt::Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StateName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Primary key of an alphabet symbol: exactly one character.
///
/// Serialized as a one-character JSON string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolChar(char);

impl SymbolChar {
    /// Parse a symbol from user input. Whitespace is significant.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(ValidationError::MissingRequiredField {
                entity: EntityKind::Symbol,
                message: SYMBOL_REQUIRED,
            }),
            (Some(c), None) => Ok(Self(c)),
            (Some(_), Some(_)) => Err(ValidationError::LengthViolation {
                entity: EntityKind::Symbol,
                message: "The symbol must be a single character.".to_string(),
            }),
        }
    }

    pub const fn from_char(c: char) -> Self {
        Self(c)
    }

    pub const fn as_char(&self) -> char {
        self.0
    }

    /// True if `value` is exactly this symbol's one-character string.
    pub fn matches(&self, value: &str) -> bool {
        let mut chars = value.chars();
        chars.next() == Some(self.0) && chars.next().is_none()
    }
}

impl From<char> for SymbolChar {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl fmt::Display for SymbolChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for SymbolChar {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut buf = [0u8; 4];
        serializer.serialize_str(self.0.encode_utf8(&mut buf))
    }
}

impl<'de> serde::Deserialize<'de> for SymbolChar {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self(c)),
            _ => Err(serde::de::Error::custom(format!(
                "symbol must be a single character, got {s:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_name_is_trimmed() {
        let name = StateName::new("  S1 ").unwrap();
        assert_eq!(name.as_str(), "S1");
    }

    #[test]
    fn state_name_length_bound() {
        assert!(StateName::new("ABCDEFGH").is_ok());
        let err = StateName::new("ABCDEFGHI").unwrap_err();
        assert!(matches!(err, ValidationError::LengthViolation { .. }));
        assert_eq!(
            err.to_string(),
            "The name of the state may be a maximum of 8 characters long."
        );
    }

    #[test]
    fn state_name_counts_characters_not_bytes() {
        assert!(StateName::new("ÄÖÜäöüßé").is_ok());
    }

    #[test]
    fn blank_state_name_is_missing() {
        let err = StateName::new("   ").unwrap_err();
        assert!(matches!(err, ValidationError::MissingRequiredField { .. }));
    }

    #[test]
    fn symbol_parse_rules() {
        assert_eq!(SymbolChar::parse("a").unwrap().as_char(), 'a');
        assert_eq!(SymbolChar::parse(" ").unwrap().as_char(), ' ');
        assert!(matches!(
            SymbolChar::parse(""),
            Err(ValidationError::MissingRequiredField { .. })
        ));
        assert!(matches!(
            SymbolChar::parse("ab"),
            Err(ValidationError::LengthViolation { .. })
        ));
    }

    #[test]
    fn symbol_matches_single_char_strings_only() {
        let symbol = SymbolChar::from_char('0');
        assert!(symbol.matches("0"));
        assert!(!symbol.matches("00"));
        assert!(!symbol.matches(""));
    }
}
