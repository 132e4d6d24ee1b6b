//! Response engine: first-match rule scan with template substitution

use super::reflection::ReflectionTable;
use super::rule::Rule;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Captures;

/// Returned when no rule matches. Unreachable with the default rules, which
/// end in a catch-all, but custom rule sets may omit one.
pub const NO_MATCH_RESPONSE: &str = "I have nothing to say to that.";

/// Maps free text to a canned response.
///
/// Rules are tried in declaration order and the first match wins. One of the
/// winning rule's templates is picked uniformly at random; the engine owns its
/// random source so a fixed seed gives a reproducible conversation.
#[derive(Debug, Clone)]
pub struct ResponseEngine {
    rules: Vec<Rule>,
    reflections: ReflectionTable,
    rng: StdRng,
}

impl ResponseEngine {
    /// Engine seeded from the operating system.
    pub fn new(rules: Vec<Rule>, reflections: ReflectionTable) -> Self {
        Self {
            rules,
            reflections,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Engine with a deterministic selection sequence.
    pub fn with_seed(rules: Vec<Rule>, reflections: ReflectionTable, seed: u64) -> Self {
        Self {
            rules,
            reflections,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The HAL rule set with the default reflections.
    pub fn hal() -> Self {
        Self::new(Rule::hal_defaults(), ReflectionTable::default())
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Index of the first rule matching `input`, if any.
    pub fn matching_rule(&self, input: &str) -> Option<usize> {
        self.rules
            .iter()
            .position(|rule| rule.captures(input).is_some())
    }

    /// Produce a response for `input`.
    pub fn respond(&mut self, input: &str) -> String {
        for rule in &self.rules {
            let Some(caps) = rule.captures(input) else {
                continue;
            };

            let responses = rule.responses();
            let template = &responses[self.rng.random_range(0..responses.len())];
            let filled = substitute(template, &caps, &self.reflections);
            return fix_punctuation(filled);
        }

        NO_MATCH_RESPONSE.to_string()
    }
}

/// Replace each `%N` with the reflected text of capture group N.
///
/// A `%` not followed by digits is copied through unchanged.
fn substitute(template: &str, caps: &Captures<'_>, reflections: &ReflectionTable) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let digits = after.len() - after.trim_start_matches(|c: char| c.is_ascii_digit()).len();

        if digits == 0 {
            out.push('%');
        } else if let Some(m) = after[..digits]
            .parse::<usize>()
            .ok()
            .and_then(|group| caps.get(group))
        {
            out.push_str(&reflections.reflect(m.as_str()));
        }
        rest = &after[digits..];
    }
    out.push_str(rest);
    out
}

/// Collapse punctuation doubled up by substitution: `"?."` becomes `"."` and
/// `"??"` becomes `"?"`.
fn fix_punctuation(mut response: String) -> String {
    if response.ends_with("?.") {
        response.truncate(response.len() - 2);
        response.push('.');
    } else if response.ends_with("??") {
        response.pop();
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> ResponseEngine {
        ResponseEngine::with_seed(Rule::hal_defaults(), ReflectionTable::default(), seed)
    }

    #[test]
    fn test_rule_one_substitutes_lowercased_capture() {
        let mut engine = seeded(7);
        let response = engine.respond("You are WORRYING");
        assert!(
            response == "Yes, I am worrying." || response == "Oh, sooo worrying.",
            "unexpected response: {response}"
        );
    }

    #[test]
    fn test_rule_two_reflects_capture() {
        let mut engine = seeded(1);
        let response = engine.respond("Are you sure about my plan?");
        assert!(
            response == "Why would you think I am sure about your plan?"
                || response == "Would you like me to be sure about your plan?",
            "unexpected response: {response}"
        );
    }

    #[test]
    fn test_fallback_fires_for_unmatched_input() {
        let mut engine = seeded(3);
        for _ in 0..10 {
            let response = engine.respond("Open the pod bay doors.");
            assert!(
                response == "Is everything OK?" || response == "Can you still communicate?",
                "unexpected response: {response}"
            );
        }
    }

    #[test]
    fn test_first_match_wins() {
        let engine = seeded(0);
        assert_eq!(engine.matching_rule("You are scary"), Some(0));
        assert_eq!(engine.matching_rule("Are you alive?"), Some(1));
        assert_eq!(engine.matching_rule("Hello"), Some(2));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = seeded(42);
        let mut b = seeded(42);
        for _ in 0..8 {
            assert_eq!(a.respond("anything"), b.respond("anything"));
        }
    }

    #[test]
    fn test_selection_varies_across_repeats() {
        let mut engine = seeded(9);
        let responses: std::collections::HashSet<String> =
            (0..64).map(|_| engine.respond("hmm")).collect();
        assert_eq!(responses.len(), 2);
    }

    #[test]
    fn test_no_match_returns_neutral_fallback() {
        let rules = vec![Rule::new("only this", ["matched"]).unwrap()];
        let mut engine = ResponseEngine::with_seed(rules, ReflectionTable::default(), 0);
        assert_eq!(engine.respond("something else"), NO_MATCH_RESPONSE);
        assert_eq!(engine.matching_rule("something else"), None);
    }

    #[test]
    fn test_missing_group_substitutes_empty() {
        let rules = vec![Rule::new("(a)", ["[%1][%2]"]).unwrap()];
        let mut engine = ResponseEngine::with_seed(rules, ReflectionTable::empty(), 0);
        assert_eq!(engine.respond("a"), "[a][]");
    }

    #[test]
    fn test_literal_percent_is_kept() {
        let rules = vec![Rule::new("(x)", ["100% %1"]).unwrap()];
        let mut engine = ResponseEngine::with_seed(rules, ReflectionTable::empty(), 0);
        assert_eq!(engine.respond("X"), "100% x");
    }

    #[test]
    fn test_punctuation_fix_up() {
        assert_eq!(fix_punctuation("Really?.".to_string()), "Really.");
        assert_eq!(fix_punctuation("Really??".to_string()), "Really?");
        assert_eq!(fix_punctuation("Fine.".to_string()), "Fine.");
    }
}
