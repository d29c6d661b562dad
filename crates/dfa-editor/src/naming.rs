//! Proposals for the next unused state name or symbol character.
//!
//! Identifiers are `prefix + suffix`, where the suffix walks the universe
//! `'0'..='9'` followed by `'a'..='z'` until an unused identifier is found.

use serde::{Deserialize, Serialize};

/// Number of characters a suffix can take.
pub const SUFFIX_UNIVERSE_LEN: usize = 36;

/// The suffix that follows `c`, or `None` past `'z'` and outside the universe.
pub const fn successor(c: char) -> Option<char> {
    match c {
        '0'..='8' | 'a'..='y' => char::from_u32(c as u32 + 1),
        '9' => Some('a'),
        _ => None,
    }
}

/// Find the first `prefix + suffix` for which `is_taken` is false.
///
/// The start suffix is always tested, even when it lies outside the
/// universe; only the advance is restricted to it. Returns the identifier
/// together with the suffix that produced it.
pub fn next_identifier(
    prefix: &str,
    start: char,
    is_taken: impl Fn(&str) -> bool,
) -> Option<(String, char)> {
    let mut suffix = start;
    loop {
        let candidate = format!("{prefix}{suffix}");
        if !is_taken(&candidate) {
            return Some((candidate, suffix));
        }
        suffix = successor(suffix)?;
    }
}

/// A proposed key and description for a new entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub key: String,
    pub description: String,
}

/// How new identifiers of one entity type are proposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingRule {
    /// Text placed before the suffix.
    pub prefix: String,

    /// First suffix to try.
    pub start: char,

    /// Proposed description; `{suffix}` is replaced by the chosen suffix.
    #[serde(default)]
    pub description_template: String,
}

impl NamingRule {
    pub fn new(prefix: impl Into<String>, start: char) -> Self {
        Self {
            prefix: prefix.into(),
            start,
            description_template: String::new(),
        }
    }

    #[must_use]
    pub fn with_description_template(mut self, template: impl Into<String>) -> Self {
        self.description_template = template.into();
        self
    }

    /// Default rule for state names: `S0`, `S1`, ...
    pub fn states() -> Self {
        Self::new("S", '0').with_description_template("State {suffix}.")
    }

    /// Default rule for symbol characters: `a`, `b`, ...
    pub fn symbols() -> Self {
        Self::new("", 'a').with_description_template("Symbol {suffix}.")
    }

    /// Propose the next identifier not rejected by `is_taken`.
    pub fn suggest(&self, is_taken: impl Fn(&str) -> bool) -> Option<Suggestion> {
        let (key, suffix) = next_identifier(&self.prefix, self.start, is_taken)?;
        let description = self
            .description_template
            .replace("{suffix}", suffix.encode_utf8(&mut [0; 4]));
        Some(Suggestion { key, description })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::*;

    fn universe() -> Vec<char> {
        ('0'..='9').chain('a'..='z').collect()
    }

    #[test]
    fn successor_walks_digits_then_letters() {
        assert_eq!(successor('0'), Some('1'));
        assert_eq!(successor('9'), Some('a'));
        assert_eq!(successor('y'), Some('z'));
        assert_eq!(successor('z'), None);
        assert_eq!(successor('A'), None);
        assert_eq!(successor('-'), None);
    }

    #[test]
    fn universe_has_expected_size() {
        let mut count = 1;
        let mut c = '0';
        while let Some(next) = successor(c) {
            count += 1;
            c = next;
        }
        assert_eq!(count, SUFFIX_UNIVERSE_LEN);
        assert_eq!(universe().len(), SUFFIX_UNIVERSE_LEN);
    }

    #[test]
    fn skips_taken_names() {
        let taken: BTreeSet<&str> = ["S0", "S1", "S2"].into();
        assert_eq!(
            next_identifier("S", '0', |name| taken.contains(name)),
            Some(("S3".to_string(), '3'))
        );
    }

    #[test]
    fn exhausted_universe_gives_nothing() {
        let taken: BTreeSet<String> = universe().iter().map(|c| format!("S{c}")).collect();
        assert_eq!(next_identifier("S", '0', |name| taken.contains(name)), None);
    }

    #[test]
    fn out_of_universe_start_is_tried_once() {
        assert_eq!(
            next_identifier("", 'A', |_| false),
            Some(("A".to_string(), 'A'))
        );
        assert_eq!(next_identifier("", 'A', |_| true), None);
    }

    #[test]
    fn default_rules_fill_descriptions() {
        let taken: BTreeSet<&str> = ["S0"].into();
        assert_eq!(
            NamingRule::states().suggest(|name| taken.contains(name)),
            Some(Suggestion {
                key: "S1".to_string(),
                description: "State 1.".to_string(),
            })
        );
        assert_eq!(
            NamingRule::symbols().suggest(|_| false),
            Some(Suggestion {
                key: "a".to_string(),
                description: "Symbol a.".to_string(),
            })
        );
    }

    proptest! {
        #[test]
        fn suggestion_is_unused_and_minimal(taken in prop::collection::btree_set(prop::sample::select(universe()), 0..36)) {
            let names: BTreeSet<String> = taken.iter().map(|c| format!("S{c}")).collect();
            let result = next_identifier("S", '0', |name| names.contains(name));
            let expected = universe().into_iter().find(|c| !taken.contains(c));
            match (result, expected) {
                (Some((name, suffix)), Some(first_free)) => {
                    prop_assert!(!names.contains(&name));
                    prop_assert_eq!(suffix, first_free);
                }
                (None, None) => {}
                (result, expected) => prop_assert!(false, "got {:?}, expected {:?}", result, expected),
            }
        }
    }
}
