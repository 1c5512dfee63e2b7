//! Rough sentence segmentation
//!
//! Newline runs collapse to a single space, then the text is cut wherever a
//! whitespace run follows `.`, `?` or `!`. No abbreviation, decimal or
//! quotation handling.
//!
//! Whitespace is a fixed set that differs from `char::is_whitespace`: it
//! includes U+FEFF and excludes U+0085.

use driftlab_core::{Error, Result};
use regex::Regex;

const SPACE_CLASS: &str =
    r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

/// Whether a character separates sentences
pub fn is_sentence_space(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Regex-based sentence splitter
#[derive(Debug, Clone)]
pub struct Segmenter {
    newline_runs: Regex,
    boundaries: Regex,
}

impl Segmenter {
    /// Create a new segmenter
    pub fn new() -> Result<Self> {
        Ok(Self {
            newline_runs: Regex::new(r"\n+").map_err(|e| {
                Error::classifier(format!("Failed to compile newline regex: {}", e))
            })?,
            boundaries: Regex::new(&format!(r"[.?!]{}+", SPACE_CLASS)).map_err(|e| {
                Error::classifier(format!("Failed to compile sentence boundary regex: {}", e))
            })?,
        })
    }

    /// Split text into trimmed, non-empty sentences in original order
    pub fn split(&self, text: &str) -> Vec<String> {
        let flattened = self.newline_runs.replace_all(text, " ");

        let mut sentences = Vec::new();
        let mut start = 0;

        for boundary in self.boundaries.find_iter(&flattened) {
            // Terminators are ASCII, so the cut lands on a char boundary
            let cut = boundary.start() + 1;
            push_trimmed(&mut sentences, &flattened[start..cut]);
            start = boundary.end();
        }

        push_trimmed(&mut sentences, &flattened[start..]);
        sentences
    }
}

fn push_trimmed(sentences: &mut Vec<String>, piece: &str) {
    let piece = piece.trim_matches(is_sentence_space);
    if !piece.is_empty() {
        sentences.push(piece.to_string());
    }
}
