use regex::Regex;
use std::sync::LazyLock;

/// Words that introduce a grade ("with a B+", "get an A", "receive C").
pub const GRADE_TRIGGERS: &[&str] = &["grade", "get", "with", "receive"];

/// Triggers also accepted as a plain "<trigger> <key>" substring.
pub const PLAIN_TRIGGERS: &[&str] = &["grade", "get", "with"];

/// Words that may follow a grade ("A grade", "B credit course").
pub const GRADE_FOLLOWERS: &[&str] = &["grade", "credit"];

/// Textual grade keys in match order. Signed and spelled variants come before
/// the bare letter so "a-" is never read as "a".
pub const GRADE_TABLE: &[(&str, f64)] = &[
    ("a+", 4.0),
    ("a-", 3.7),
    ("a minus", 3.7),
    ("a", 4.0),
    ("b+", 3.3),
    ("b plus", 3.3),
    ("b-", 2.7),
    ("b minus", 2.7),
    ("b", 3.0),
    ("c+", 2.3),
    ("c plus", 2.3),
    ("c-", 1.7),
    ("c minus", 1.7),
    ("c", 2.0),
    ("d+", 1.3),
    ("d plus", 1.3),
    ("d-", 0.7),
    ("d minus", 0.7),
    ("d", 1.0),
    ("f", 0.0),
];

/// Descending thresholds for the reverse mapping.
const LETTER_LADDER: &[(f64, &str)] = &[
    (4.0, "A"),
    (3.7, "A-"),
    (3.3, "B+"),
    (3.0, "B"),
    (2.7, "B-"),
    (2.3, "C+"),
    (2.0, "C"),
    (1.7, "C-"),
    (1.3, "D+"),
    (1.0, "D"),
];

static STANDARD: LazyLock<GradeLexicon> = LazyLock::new(|| GradeLexicon::from_table(GRADE_TABLE));

struct GradeEntry {
    key: &'static str,
    points: f64,
    pattern: Regex,
}

/// Maps grade tokens in free text to grade points.
///
/// Grades are one or two characters long and collide with ordinary words, so a
/// key only counts when it sits next to a grade-indicating word.
pub struct GradeLexicon {
    entries: Vec<GradeEntry>,
}

impl GradeLexicon {
    /// The process-wide standard 4.0-scale lexicon.
    pub fn standard() -> &'static GradeLexicon {
        &STANDARD
    }

    fn from_table(table: &'static [(&'static str, f64)]) -> Self {
        let entries = table
            .iter()
            .filter_map(|&(key, points)| {
                Regex::new(&context_pattern(key))
                    .ok()
                    .map(|pattern| GradeEntry { key, points, pattern })
            })
            .collect();
        Self { entries }
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.key)
    }

    /// First key (in table order) found in grade context.
    pub fn lookup(&self, text: &str) -> Option<f64> {
        let lowered = text.to_lowercase();
        self.entries
            .iter()
            .find(|entry| {
                entry.pattern.is_match(&lowered)
                    || PLAIN_TRIGGERS
                        .iter()
                        .any(|trigger| lowered.contains(&format!("{} {}", trigger, entry.key)))
            })
            .map(|entry| entry.points)
    }

    /// Canonical letter for a grade-point value.
    pub fn letter_for(points: f64) -> &'static str {
        LETTER_LADDER
            .iter()
            .find(|(threshold, _)| points >= *threshold)
            .map(|(_, letter)| *letter)
            .unwrap_or("F")
    }
}

fn context_pattern(key: &str) -> String {
    let escaped = regex::escape(key);
    // "\b" after a trailing sign would need a word character to follow it
    let tail = if key.ends_with(|c: char| c.is_alphanumeric()) {
        r"\b"
    } else {
        r"(?:\W|$)"
    };
    format!(
        r"\b(?:{})\s+(?:an?\s+)?{}{}|\b{}\s+(?:{})",
        GRADE_TRIGGERS.join("|"),
        escaped,
        tail,
        escaped,
        GRADE_FOLLOWERS.join("|"),
    )
}
