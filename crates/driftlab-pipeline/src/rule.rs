//! Phrase removal rules for the reasoning stage
//!
//! Each rule names a phrase. A match starts at the phrase, ignoring case
//! without folding non-ASCII letters onto ASCII ones, and runs up to and
//! including the next `.`, or to the end of the text when no period follows.
//! Rules apply in order; every match of a rule is deleted before the next
//! rule runs.

use driftlab_core::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A single removal rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalRule {
    /// Rule identifier
    pub name: String,

    /// Literal phrase that starts a match
    pub phrase: String,

    /// Whether this rule is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl RemovalRule {
    /// Create an enabled rule
    pub fn new(name: impl Into<String>, phrase: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phrase: phrase.into(),
            enabled: true,
        }
    }

    fn pattern(&self) -> String {
        format!(r"{}[^.]*\.?", case_insensitive_literal(&self.phrase))
    }
}

/// Literal pattern that folds case without mapping non-ASCII letters onto
/// ASCII ones, so the Kelvin sign never matches "k"
fn case_insensitive_literal(phrase: &str) -> String {
    let mut pattern = String::with_capacity(phrase.len() * 4);
    let mut buf = [0; 4];

    for ch in phrase.chars() {
        if ch.is_ascii_alphabetic() {
            pattern.push('[');
            pattern.push(ch.to_ascii_lowercase());
            pattern.push(ch.to_ascii_uppercase());
            pattern.push(']');
        } else if ch.is_ascii() {
            pattern.push_str(&regex::escape(ch.encode_utf8(&mut buf)));
        } else {
            pattern.push_str("(?i:");
            pattern.push_str(&regex::escape(ch.encode_utf8(&mut buf)));
            pattern.push(')');
        }
    }

    pattern
}

fn default_true() -> bool {
    true
}

/// Rules that strip formatting, tone and structure requirements
pub fn default_removal_rules() -> Vec<RemovalRule> {
    vec![
        RemovalRule::new("markdown-table", "in a markdown table"),
        RemovalRule::new("tone-change", "don't change the tone"),
        RemovalRule::new("section-headings", "keep my original section headings"),
    ]
}

struct CompiledRule {
    name: String,
    regex: Regex,
}

/// Compiled, ordered removal rules
pub struct RemovalRuleSet {
    rules: Vec<CompiledRule>,
}

/// Result of applying a rule set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    /// Residual text
    pub text: String,

    /// Names of rules that deleted something, in application order
    pub fired: Vec<String>,
}

impl RemovalRuleSet {
    /// Compile the enabled rules, keeping their order
    pub fn compile(rules: &[RemovalRule]) -> Result<Self> {
        let mut compiled = Vec::with_capacity(rules.len());

        for rule in rules.iter().filter(|r| r.enabled) {
            if rule.phrase.trim().is_empty() {
                return Err(Error::config(format!(
                    "removal rule '{}' has an empty phrase",
                    rule.name
                )));
            }

            let regex = Regex::new(&rule.pattern()).map_err(|e| {
                Error::pipeline(format!(
                    "Failed to compile removal rule '{}': {}",
                    rule.name, e
                ))
            })?;

            compiled.push(CompiledRule {
                name: rule.name.clone(),
                regex,
            });
        }

        Ok(Self { rules: compiled })
    }

    /// Delete every match of each rule, rule by rule
    pub fn apply(&self, text: &str) -> Removal {
        let mut current = text.to_string();
        let mut fired = Vec::new();

        for rule in &self.rules {
            if rule.regex.is_match(&current) {
                current = rule.regex.replace_all(&current, "").into_owned();
                fired.push(rule.name.clone());
            }
        }

        Removal {
            text: current,
            fired,
        }
    }

    /// Number of enabled rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
