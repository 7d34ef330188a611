//! Text-level building blocks: numbers, grade words and course names.

pub mod course;
pub mod lexicon;
pub mod numeric;

pub use course::CourseNameExtractor;
pub use lexicon::GradeLexicon;
pub use numeric::{
    LexicalNumberSource, NumberSource, NumberSourceError, NumericTokenExtractor,
    PatternNumberSource,
};

/// One chat message. Matching runs on `lowered`; names are cut from `original`.
///
/// Lowering is ASCII-only so byte offsets found in `lowered` are valid in `original`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    original: String,
    lowered: String,
}

impl Utterance {
    pub fn new(text: &str) -> Self {
        Self {
            original: text.to_string(),
            lowered: text.to_ascii_lowercase(),
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    pub fn mentions(&self, needle: &str) -> bool {
        self.lowered.contains(needle)
    }
}
