use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::types::Intent;
use crate::nlp::course::ACTION_VERBS;

pub const CREDIT_WORDS: &[&str] = &["credit", "unit", "hour"];
pub const COURSE_NOUNS: &[&str] = &["course", "class"];
pub const GPA_WORDS: &[&str] = &["gpa", "grade"];
pub const QUESTION_WORDS: &[&str] = &["what", "how"];
pub const HISTORY_WORDS: &[&str] = &["previous", "old", "past", "cumulative"];
pub const OWN_GPA_PHRASES: &[&str] = &["my gpa", "my grade"];
pub const COPULAS: &[&str] = &["was", "is"];
pub const QUERY_VERBS: &[&str] = &[
    "what", "show", "tell", "calculate", "compute", "get", "whats", "what is", "what's",
];
pub const SCOPE_WORDS: &[&str] = &["my", "current", "semester", "overall", "predicted"];
pub const REMOVE_VERBS: &[&str] = &["remove", "delete", "drop"];
pub const RESET_VERBS: &[&str] = &["reset", "clear", "delete"];
pub const TOTALITY_WORDS: &[&str] = &["all", "everything"];
pub const HELP_PHRASES: &[&str] = &["help", "what can", "how do", "assist"];
pub const GREETING_WORDS: &[&str] = &["hello", "hi", "hey", "greetings"];
pub const THANKS_WORDS: &[&str] = &["thank", "thanks", "thx"];

fn alternation(words: &[&str]) -> String {
    words.iter().map(|w| regex::escape(w)).collect::<Vec<_>>().join("|")
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("classifier pattern compiles")
}

/// `(a|b).*(c|d)`: a word from the first table somewhere before one from the second.
fn ordered(first: &[&str], second: &[&str]) -> Regex {
    compile(&format!("(?:{}).*(?:{})", alternation(first), alternation(second)))
}

fn any_of(words: &[&str]) -> Regex {
    compile(&format!("(?:{})", alternation(words)))
}

fn whole_word(words: &[&str]) -> Regex {
    compile(&format!(r"\b(?:{})\b", alternation(words)))
}

static GRADE_LETTER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\b(?:grade\s+)?(?:a\+?|a-?|b\+?|b-?|c\+?|c-?|d\+?|d-?|f)\b"));
static CREDIT_WORD: LazyLock<Regex> = LazyLock::new(|| any_of(CREDIT_WORDS));
static GPA_QUESTION: LazyLock<Regex> = LazyLock::new(|| ordered(QUESTION_WORDS, GPA_WORDS));
static ADD_VERB: LazyLock<Regex> = LazyLock::new(|| any_of(ACTION_VERBS));
static ADD_COURSE: LazyLock<Regex> = LazyLock::new(|| ordered(ACTION_VERBS, COURSE_NOUNS));
static HISTORY_GPA: LazyLock<Regex> = LazyLock::new(|| ordered(HISTORY_WORDS, GPA_WORDS));
static OWN_GPA_STATEMENT: LazyLock<Regex> = LazyLock::new(|| ordered(OWN_GPA_PHRASES, COPULAS));
static GPA_WORD: LazyLock<Regex> = LazyLock::new(|| any_of(GPA_WORDS));
static QUERY_VERB: LazyLock<Regex> = LazyLock::new(|| any_of(QUERY_VERBS));
static SCOPE_WORD: LazyLock<Regex> = LazyLock::new(|| any_of(SCOPE_WORDS));
static REMOVE_COURSE: LazyLock<Regex> = LazyLock::new(|| ordered(REMOVE_VERBS, COURSE_NOUNS));
static RESET_ALL: LazyLock<Regex> = LazyLock::new(|| ordered(RESET_VERBS, TOTALITY_WORDS));
static HELP: LazyLock<Regex> = LazyLock::new(|| any_of(HELP_PHRASES));
static GREETING: LazyLock<Regex> = LazyLock::new(|| whole_word(GREETING_WORDS));
static THANKS: LazyLock<Regex> = LazyLock::new(|| compile(r"\b(?:thank|thanks|thx)"));

/// Evidence gathered once per utterance and shared by every rule.
#[derive(Debug, Clone, Copy)]
pub struct Signals<'a> {
    pub text: &'a str,
    pub numeric_tokens: usize,
}

impl<'a> Signals<'a> {
    pub fn new(lowered: &'a str, numeric_tokens: usize) -> Self {
        Self {
            text: lowered,
            numeric_tokens,
        }
    }

    pub fn has_grade_indicator(&self) -> bool {
        GRADE_LETTER.is_match(self.text)
    }

    pub fn has_credit_indicator(&self) -> bool {
        CREDIT_WORD.is_match(self.text) && self.numeric_tokens > 0
    }

    pub fn has_course_info(&self) -> bool {
        self.has_grade_indicator() && self.has_credit_indicator()
    }

    pub fn asks_about_gpa(&self) -> bool {
        GPA_QUESTION.is_match(self.text)
    }

    pub fn has_add_verb(&self) -> bool {
        ADD_VERB.is_match(self.text)
    }

    pub fn adds_course_noun(&self) -> bool {
        ADD_COURSE.is_match(self.text)
    }

    pub fn states_previous_gpa(&self) -> bool {
        HISTORY_GPA.is_match(self.text) || OWN_GPA_STATEMENT.is_match(self.text)
    }

    pub fn queries_gpa(&self) -> bool {
        GPA_WORD.is_match(self.text)
            && (QUERY_VERB.is_match(self.text) || SCOPE_WORD.is_match(self.text))
    }

    pub fn removes_course(&self) -> bool {
        REMOVE_COURSE.is_match(self.text)
    }

    pub fn resets_all(&self) -> bool {
        RESET_ALL.is_match(self.text)
    }

    pub fn asks_for_help(&self) -> bool {
        HELP.is_match(self.text)
    }

    pub fn greets(&self) -> bool {
        GREETING.is_match(self.text)
    }

    pub fn thanks(&self) -> bool {
        THANKS.is_match(self.text)
    }
}

/// One entry of the priority table.
pub struct Rule {
    pub name: &'static str,
    pub intent: Intent,
    pub matches: fn(&Signals) -> bool,
}

/// Evaluated top to bottom; the first match wins.
pub const RULES: &[Rule] = &[
    Rule {
        name: "course_with_gpa_question",
        intent: Intent::AddCourseWithGpaQuery,
        matches: |s| s.has_course_info() && s.asks_about_gpa(),
    },
    Rule {
        name: "add_with_grade_and_credits",
        intent: Intent::AddCourse,
        matches: |s| s.has_add_verb() && s.has_course_info(),
    },
    Rule {
        name: "add_course_noun",
        intent: Intent::AddCourse,
        matches: |s| s.adds_course_noun(),
    },
    Rule {
        name: "previous_gpa",
        intent: Intent::SetPreviousGpa,
        matches: |s| s.states_previous_gpa(),
    },
    Rule {
        name: "gpa_query",
        intent: Intent::CalculateGpa,
        matches: |s| s.queries_gpa(),
    },
    Rule {
        name: "remove_course",
        intent: Intent::RemoveCourseRedirect,
        matches: |s| s.removes_course(),
    },
    Rule {
        name: "reset_all",
        intent: Intent::ResetRedirect,
        matches: |s| s.resets_all(),
    },
    Rule {
        name: "help",
        intent: Intent::Help,
        matches: |s| s.asks_for_help(),
    },
    Rule {
        name: "greeting",
        intent: Intent::Greeting,
        matches: |s| s.greets(),
    },
    Rule {
        name: "thanks",
        intent: Intent::Thanks,
        matches: |s| s.thanks(),
    },
];

/// Rule-based, first-match-wins intent selection.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// `lowered` must already be lower-cased.
    pub fn classify(&self, lowered: &str, numeric_tokens: usize) -> Intent {
        let signals = Signals::new(lowered, numeric_tokens);
        match RULES.iter().find(|rule| (rule.matches)(&signals)) {
            Some(rule) => {
                debug!(rule = rule.name, intent = %rule.intent, "intent matched");
                rule.intent
            }
            None => Intent::Unrecognized,
        }
    }
}
