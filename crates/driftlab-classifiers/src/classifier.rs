//! Keyword-based constraint classifier
//!
//! A sentence is a constraint when its lowercased form contains any keyword
//! as a plain substring. Matching is not word-boundary aware, so "useful"
//! counts as a constraint through "use".

use aho_corasick::{AhoCorasick, MatchKind};
use driftlab_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::segmenter::Segmenter;

/// Default constraint keywords, matched against lowercased sentences
pub const DEFAULT_CONSTRAINT_KEYWORDS: &[&str] = &[
    "must",
    "only",
    "never",
    "don't",
    "do not",
    "exactly",
    "verbatim",
    "keep",
    "format",
    "style",
    "tone",
    "respond in",
    "output as",
    "use",
];

/// Classifier configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierSettings {
    /// Keywords marking a sentence as a constraint
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
        }
    }
}

fn default_keywords() -> Vec<String> {
    DEFAULT_CONSTRAINT_KEYWORDS
        .iter()
        .map(|k| k.to_string())
        .collect()
}

/// Label assigned to each sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentenceLabel {
    /// Carries the task intent
    Core,
    /// Carries a formatting or behavioral rule
    Constraint,
}

/// A sentence with its label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedSentence {
    /// Sentence text, original casing
    pub text: String,

    /// Assigned label
    pub label: SentenceLabel,

    /// Leftmost keyword that matched, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl ClassifiedSentence {
    pub fn is_constraint(&self) -> bool {
        self.label == SentenceLabel::Constraint
    }
}

/// Ordered, labelled sentences of one instruction
///
/// Core text, constraints and the full sentence list are all views over the
/// same sequence, so order is always recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedText {
    sentences: Vec<ClassifiedSentence>,
    core_text: String,
}

impl ClassifiedText {
    fn new(sentences: Vec<ClassifiedSentence>) -> Self {
        let core_text = sentences
            .iter()
            .filter(|s| !s.is_constraint())
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            sentences,
            core_text,
        }
    }

    /// Labelled sentences in original order
    pub fn sentences(&self) -> &[ClassifiedSentence] {
        &self.sentences
    }

    /// Core sentences joined with single spaces
    pub fn core_text(&self) -> &str {
        &self.core_text
    }

    /// Constraint sentences in original order
    pub fn constraints(&self) -> Vec<&str> {
        self.sentences
            .iter()
            .filter(|s| s.is_constraint())
            .map(|s| s.text.as_str())
            .collect()
    }

    /// Every sentence in original order
    pub fn all_sentences(&self) -> Vec<&str> {
        self.sentences.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn constraint_count(&self) -> usize {
        self.sentences.iter().filter(|s| s.is_constraint()).count()
    }

    pub fn has_constraints(&self) -> bool {
        self.sentences.iter().any(|s| s.is_constraint())
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Constraint classifier using an Aho-Corasick keyword automaton
#[derive(Debug, Clone)]
pub struct ConstraintClassifier {
    segmenter: Segmenter,
    matcher: AhoCorasick,
    keywords: Vec<String>,
}

impl ConstraintClassifier {
    /// Create a classifier from settings
    pub fn new(settings: &ClassifierSettings) -> Result<Self> {
        let keywords: Vec<String> = settings
            .keywords
            .iter()
            .map(|k| k.to_lowercase())
            .collect();

        if keywords.is_empty() {
            return Err(Error::config("classifier.keywords must not be empty"));
        }
        if keywords.iter().any(|k| k.is_empty()) {
            return Err(Error::config("classifier.keywords must not contain empty keywords"));
        }

        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostFirst)
            .build(&keywords)
            .map_err(|e| Error::classifier(format!("Failed to build keyword matcher: {}", e)))?;

        Ok(Self {
            segmenter: Segmenter::new()?,
            matcher,
            keywords,
        })
    }

    /// Create a classifier with the default keyword set
    pub fn standard() -> Result<Self> {
        Self::new(&ClassifierSettings::default())
    }

    pub fn segmenter(&self) -> &Segmenter {
        &self.segmenter
    }

    /// Lowercased keywords in match priority order
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Leftmost keyword contained in the sentence, if any
    pub fn matched_keyword(&self, sentence: &str) -> Option<&str> {
        let lower = sentence.to_lowercase();
        self.matcher
            .find(&lower)
            .map(|m| self.keywords[m.pattern().as_usize()].as_str())
    }

    /// Whether the sentence carries a constraint
    pub fn is_constraint(&self, sentence: &str) -> bool {
        self.matcher.is_match(&sentence.to_lowercase())
    }

    /// Segment and classify raw text
    pub fn classify(&self, text: &str) -> ClassifiedText {
        self.classify_sentences(self.segmenter.split(text))
    }

    /// Classify already segmented sentences
    pub fn classify_sentences(&self, sentences: Vec<String>) -> ClassifiedText {
        let labelled: Vec<ClassifiedSentence> = sentences
            .into_iter()
            .map(|text| {
                let keyword = self.matched_keyword(&text).map(str::to_string);
                let label = if keyword.is_some() {
                    SentenceLabel::Constraint
                } else {
                    SentenceLabel::Core
                };
                ClassifiedSentence {
                    text,
                    label,
                    keyword,
                }
            })
            .collect();

        let classified = ClassifiedText::new(labelled);

        debug!(
            sentences = classified.sentences().len(),
            constraints = classified.constraint_count(),
            "Classified instruction"
        );

        classified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> ConstraintClassifier {
        ConstraintClassifier::standard().unwrap()
    }

    #[test]
    fn test_all_constraints_example() {
        let text = "Summarize this document in exactly 5 bullet points. Keep my original section headings. Respond in a Markdown table.";
        let classified = classifier().classify(text);

        assert_eq!(classified.constraint_count(), 3);
        assert_eq!(classified.core_text(), "");
        assert_eq!(
            classified.constraints(),
            vec![
                "Summarize this document in exactly 5 bullet points.",
                "Keep my original section headings.",
                "Respond in a Markdown table.",
            ]
        );
    }

    #[test]
    fn test_zero_constraints() {
        let text = "Summarize the report. List the risks.";
        let classified = classifier().classify(text);

        assert!(!classified.has_constraints());
        assert!(classified.constraints().is_empty());
        assert_eq!(classified.core_text(), "Summarize the report. List the risks.");
    }

    #[test]
    fn test_mixed_order_preserved() {
        let text = "Rewrite the policy. Do NOT shorten it. Here is the document: [TEXT]";
        let classified = classifier().classify(text);

        assert_eq!(
            classified.core_text(),
            "Rewrite the policy. Here is the document: [TEXT]"
        );
        assert_eq!(classified.constraints(), vec!["Do NOT shorten it."]);
        assert_eq!(
            classified.all_sentences(),
            vec![
                "Rewrite the policy.",
                "Do NOT shorten it.",
                "Here is the document: [TEXT]"
            ]
        );
    }

    #[test]
    fn test_substring_matching_is_literal() {
        let classifier = classifier();
        assert!(classifier.is_constraint("This is useful."));
        assert!(classifier.is_constraint("The house is red."));
        assert!(classifier.is_constraint("Mention the stone bridge."));
        assert!(!classifier.is_constraint("Summarize the report."));
    }

    #[test]
    fn test_case_insensitive_and_casing_preserved() {
        let classified = classifier().classify("NEVER use emojis.");
        assert_eq!(classified.constraints(), vec!["NEVER use emojis."]);
        assert_eq!(classified.sentences()[0].keyword.as_deref(), Some("never"));
    }

    #[test]
    fn test_matched_keyword_is_leftmost() {
        let classifier = classifier();
        assert_eq!(classifier.matched_keyword("Keep the tone calm."), Some("keep"));
        assert_eq!(
            classifier.matched_keyword("Please respond in French."),
            Some("respond in")
        );
        assert_eq!(classifier.matched_keyword("List the risks."), None);
    }

    #[test]
    fn test_empty_text() {
        let classified = classifier().classify("");
        assert!(classified.is_empty());
        assert_eq!(classified.core_text(), "");
    }

    #[test]
    fn test_custom_keywords_lowercased() {
        let settings = ClassifierSettings {
            keywords: vec!["BULLET".to_string()],
        };
        let classifier = ConstraintClassifier::new(&settings).unwrap();
        assert!(classifier.is_constraint("Use 3 bullets."));
        assert!(!classifier.is_constraint("Keep it short."));
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let empty = ClassifierSettings { keywords: vec![] };
        assert!(matches!(
            ConstraintClassifier::new(&empty),
            Err(Error::Config(_))
        ));

        let blank = ClassifierSettings {
            keywords: vec!["must".to_string(), String::new()],
        };
        assert!(matches!(
            ConstraintClassifier::new(&blank),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_settings_yaml_defaults() {
        let settings: ClassifierSettings = serde_yaml::from_str("{}").unwrap();
        assert_eq!(settings.keywords.len(), DEFAULT_CONSTRAINT_KEYWORDS.len());
    }
}
