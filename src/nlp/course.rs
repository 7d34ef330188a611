use regex::Regex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::LazyLock;

use crate::nlp::Utterance;

/// Verbs that open the course-name window, in priority order.
pub const ACTION_VERBS: &[&str] = &[
    "add", "create", "enter", "input", "take", "taking", "register",
];

/// Phrases that close the window.
pub const STOP_PHRASES: &[&str] = &[
    "with",
    "grade",
    "credit",
    "this semester",
    "which is",
    "that is",
    "and i get",
    "what",
];

/// Whole words dropped from the window.
pub const FILLER_WORDS: &[&str] = &[
    "course",
    "class",
    "hypothetical",
    "predicted",
    "future",
    "a",
    "an",
    "the",
    "this",
    "that",
    "semester",
];

const MIN_NAME_LEN: usize = 2;

static FILLER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", FILLER_WORDS.join("|")))
        .expect("filler pattern compiles")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));

/// Subject code shape, e.g. "math 161a" or "CS101".
static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b([a-z]+\s*\d+[a-z]*)\b").expect("code pattern compiles"));

static PLACEHOLDER_SEQ: AtomicU64 = AtomicU64::new(1);

/// Best-effort course name isolation. Always yields a usable name: when nothing
/// plausible is found a numbered placeholder is returned instead of an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct CourseNameExtractor;

impl CourseNameExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, utterance: &Utterance) -> String {
        if let Some(name) = self.extract_window(utterance) {
            return name;
        }
        if let Some(code) = self.extract_code(utterance) {
            return code;
        }
        Self::placeholder()
    }

    /// Text between the first action verb and the next stop phrase, fillers removed.
    pub fn extract_window(&self, utterance: &Utterance) -> Option<String> {
        let lowered = utterance.lowered();
        let start = ACTION_VERBS
            .iter()
            .find_map(|verb| lowered.find(verb).map(|idx| idx + verb.len()))?;

        let end = STOP_PHRASES
            .iter()
            .filter_map(|stop| lowered[start..].find(stop).map(|idx| start + idx))
            .min()
            .unwrap_or(lowered.len());

        let raw = utterance.original()[start..end].trim();
        let stripped = FILLER_PATTERN.replace_all(raw, "");
        let name = WHITESPACE.replace_all(stripped.trim(), " ").trim().to_string();

        (name.chars().count() >= MIN_NAME_LEN).then_some(name)
    }

    pub fn extract_code(&self, utterance: &Utterance) -> Option<String> {
        CODE_PATTERN
            .captures(utterance.original())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .filter(|code| code.chars().count() >= MIN_NAME_LEN)
    }

    fn placeholder() -> String {
        format!("Course {}", PLACEHOLDER_SEQ.fetch_add(1, Ordering::Relaxed))
    }
}
