//! Pattern/response rules
//!
//! A [`Rule`] pairs a regular expression with the response templates that may
//! be emitted when it matches. Templates reference capture groups with `%1`,
//! `%2`, and so on.

use crate::core::error::DomainError;
use regex::{Captures, Regex, RegexBuilder};

/// A compiled pattern plus its candidate response templates.
///
/// Patterns are case-insensitive and anchored at the start of the input, so
/// `"You are (worrying)"` matches `"you are worrying me"` but not
/// `"I think you are worrying"`. The empty pattern matches any input.
#[derive(Debug, Clone)]
pub struct Rule {
    source: String,
    regex: Regex,
    responses: Vec<String>,
}

impl Rule {
    /// Compile a rule. Fails on an invalid pattern or an empty template list.
    pub fn new<S: Into<String>>(
        pattern: &str,
        responses: impl IntoIterator<Item = S>,
    ) -> Result<Self, DomainError> {
        let responses: Vec<String> = responses.into_iter().map(Into::into).collect();
        if responses.is_empty() {
            return Err(DomainError::EmptyRule(pattern.to_string()));
        }

        let regex = RegexBuilder::new(&format!("^(?:{})", pattern))
            .case_insensitive(true)
            .build()
            .map_err(|e| DomainError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
            responses,
        })
    }

    /// The pattern as written, before anchoring.
    pub fn pattern(&self) -> &str {
        &self.source
    }

    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    /// True for the catch-all rule (empty pattern).
    pub fn is_fallback(&self) -> bool {
        self.source.is_empty()
    }

    /// Match `input` against this rule's pattern.
    pub fn captures<'t>(&self, input: &'t str) -> Option<Captures<'t>> {
        self.regex.captures(input)
    }

    /// The fixed HAL rule set: two conversational rules and a catch-all.
    pub fn hal_defaults() -> Vec<Rule> {
        DEFAULT_RULES
            .iter()
            .filter_map(|(pattern, responses)| Rule::new(pattern, responses.iter().copied()).ok())
            .collect()
    }
}

const DEFAULT_RULES: &[(&str, &[&str])] = &[
    (
        r"You are (worrying|scary|disturbing)",
        &["Yes, I am %1.", "Oh, sooo %1."],
    ),
    (
        r"Are you ([\w\s]+)\?",
        &["Why would you think I am %1?", "Would you like me to be %1?"],
    ),
    ("", &["Is everything OK?", "Can you still communicate?"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_compile_in_order() {
        let rules = Rule::hal_defaults();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].pattern(), "You are (worrying|scary|disturbing)");
        assert!(rules[2].is_fallback());
        assert!(!rules[0].is_fallback());
    }

    #[test]
    fn test_pattern_is_case_insensitive() {
        let rule = Rule::new("You are (worrying)", ["%1"]).unwrap();
        let caps = rule.captures("YOU ARE WORRYING").unwrap();
        assert_eq!(&caps[1], "WORRYING");
    }

    #[test]
    fn test_pattern_is_anchored_at_start() {
        let rule = Rule::new("You are (worrying)", ["%1"]).unwrap();
        assert!(rule.captures("you are worrying me").is_some());
        assert!(rule.captures("I think you are worrying").is_none());
    }

    #[test]
    fn test_empty_pattern_matches_everything() {
        let rule = Rule::new("", ["ok"]).unwrap();
        assert!(rule.captures("").is_some());
        assert!(rule.captures("anything at all").is_some());
    }

    #[test]
    fn test_empty_responses_rejected() {
        let err = Rule::new("x", Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, DomainError::EmptyRule(_)));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = Rule::new("(unclosed", ["x"]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidPattern { .. }));
    }
}
