//! Pronoun reflection for echoing captured text back to the user

use crate::core::error::DomainError;
use regex::{Captures, Regex};

/// Default first/second person swaps.
///
/// When several keys could match at the same position the longest wins
/// (`"i'm"` over `"i"`, `"you are"` over `"you"`); equal lengths keep
/// declaration order.
const DEFAULT_REFLECTIONS: &[(&str, &str)] = &[
    ("i am", "you are"),
    ("i was", "you were"),
    ("i", "you"),
    ("i'm", "you are"),
    ("i'd", "you would"),
    ("i've", "you have"),
    ("i'll", "you will"),
    ("my", "your"),
    ("you are", "I am"),
    ("you were", "I was"),
    ("you've", "I have"),
    ("you'll", "I will"),
    ("your", "my"),
    ("yours", "mine"),
    ("you", "me"),
    ("me", "you"),
];

/// Ordered token → counterpart mapping applied to captured text.
///
/// Captured text is lowercased first, then every whole-word occurrence of a
/// key is replaced in a single left-to-right pass, so a replacement is never
/// reflected a second time.
#[derive(Debug, Clone)]
pub struct ReflectionTable {
    entries: Vec<(String, String)>,
    matcher: Option<Regex>,
}

impl ReflectionTable {
    /// Build a table from ordered `(token, counterpart)` pairs.
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Result<Self, DomainError>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entries: Vec<(String, String)> = entries
            .into_iter()
            .map(|(k, v)| (k.into().to_lowercase(), v.into()))
            .collect();

        let matcher = if entries.is_empty() {
            None
        } else {
            let mut keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
            // Stable: equal-length keys stay in declaration order.
            keys.sort_by_key(|k| std::cmp::Reverse(k.len()));
            let alternation = keys
                .iter()
                .map(|k| regex::escape(k))
                .collect::<Vec<_>>()
                .join("|");
            let pattern = format!(r"\b({})\b", alternation);
            let regex = Regex::new(&pattern).map_err(|e| DomainError::InvalidPattern {
                pattern,
                reason: e.to_string(),
            })?;
            Some(regex)
        };

        Ok(Self { entries, matcher })
    }

    /// Table with no entries: captures are only lowercased.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            matcher: None,
        }
    }

    /// Look up the counterpart of a single token.
    pub fn get(&self, token: &str) -> Option<&str> {
        let token = token.to_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == token)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lowercase `text` and swap every reflected token it contains.
    pub fn reflect(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let Some(matcher) = &self.matcher else {
            return lowered;
        };

        matcher
            .replace_all(&lowered, |caps: &Captures<'_>| {
                let token = &caps[0];
                self.get(token).unwrap_or(token).to_string()
            })
            .into_owned()
    }
}

impl Default for ReflectionTable {
    fn default() -> Self {
        // Default keys are escaped literals and always compile.
        Self::new(DEFAULT_REFLECTIONS.iter().copied()).unwrap_or_else(|_| Self::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_has_all_entries() {
        let table = ReflectionTable::default();
        assert_eq!(table.len(), 16);
        assert_eq!(table.get("you"), Some("me"));
        assert_eq!(table.get("YOUR"), Some("my"));
        assert_eq!(table.get("worrying"), None);
    }

    #[test]
    fn test_reflect_lowercases_unreflected_text() {
        let table = ReflectionTable::default();
        assert_eq!(table.reflect("Worrying"), "worrying");
    }

    #[test]
    fn test_reflect_swaps_whole_words_only() {
        let table = ReflectionTable::default();
        assert_eq!(table.reflect("my mind"), "your mind");
        // "mystery" contains "my" but is not a whole word
        assert_eq!(table.reflect("mystery"), "mystery");
    }

    #[test]
    fn test_reflect_prefers_longest_key() {
        let table = ReflectionTable::default();
        assert_eq!(table.reflect("I am afraid"), "you are afraid");
        assert_eq!(table.reflect("you are sure"), "I am sure");
    }

    #[test]
    fn test_reflect_contractions() {
        let table = ReflectionTable::default();
        assert_eq!(table.reflect("I'm sure"), "you are sure");
        assert_eq!(table.reflect("I'd go"), "you would go");
        assert_eq!(table.reflect("I've seen it"), "you have seen it");
        assert_eq!(table.reflect("I'll stay"), "you will stay");
        assert_eq!(table.reflect("you'll see"), "I will see");
    }

    #[test]
    fn test_equal_length_keys_keep_declaration_order() {
        let table =
            ReflectionTable::new([("ab", "first"), ("ab", "second"), ("a", "short")]).unwrap();
        assert_eq!(table.reflect("ab a"), "first short");
    }

    #[test]
    fn test_reflect_does_not_reflect_twice() {
        let table = ReflectionTable::default();
        // "you" -> "me" must not turn back into "you"
        assert_eq!(table.reflect("you and me"), "me and you");
    }

    #[test]
    fn test_custom_table() {
        let table = ReflectionTable::new([("dave", "HAL")]).unwrap();
        assert_eq!(table.reflect("Dave is here"), "HAL is here");
        assert_eq!(table.get("Dave"), Some("HAL"));
    }

    #[test]
    fn test_empty_table_only_lowercases() {
        let table = ReflectionTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.reflect("You Are"), "you are");
    }
}
