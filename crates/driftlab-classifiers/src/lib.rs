//! driftlab Classifiers
//!
//! Splits an instruction into sentences and labels each one as task intent
//! ("core") or as a formatting/behavioral rule ("constraint").
//!
//! Both steps are deliberately rough heuristics:
//! - Segmentation cuts after `.`, `?` or `!` followed by whitespace (regex)
//! - Classification is case-insensitive keyword substring matching
//!
//! Classification is pure: the same text always yields the same labels.

pub mod classifier;
pub mod segmenter;

pub use classifier::{
    ClassifiedSentence, ClassifiedText, ClassifierSettings, ConstraintClassifier, SentenceLabel,
    DEFAULT_CONSTRAINT_KEYWORDS,
};
pub use segmenter::{is_sentence_space, Segmenter};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::{ClassifiedText, ConstraintClassifier, SentenceLabel};
    pub use crate::segmenter::Segmenter;
}
