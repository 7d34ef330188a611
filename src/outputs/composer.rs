use regex::Regex;
use std::sync::LazyLock;

use crate::intent::{CourseSlots, Intent, PreviousGpaSlots, SlotError};
use crate::ledger::AggregateSnapshot;
use crate::nlp::GradeLexicon;

/// A `<br>` together with any whitespace (newlines included) before it.
static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*<br\s*/?>").expect("line break pattern compiles"));
static INLINE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?strong>").expect("tag pattern compiles"));

const HELP_TEXT: &str = "I can help you with:
<br><br>
<strong>Adding Courses:</strong>
<br>• \"Add Math 101 with grade A and 3 credits\"
<br>• \"Add Biology with B+ and 4 credits\"
<br><br>
<strong>Previous GPA:</strong>
<br>• \"My previous GPA is 3.5 with 60 credits\"
<br>• \"Set previous GPA to 3.2 and 45 credits\"
<br><br>
<strong>Calculate GPA:</strong>
<br>• \"What's my semester GPA?\"
<br>• \"Calculate my overall GPA\"";

const FALLBACK_TEXT: &str = "I'm not sure I understood that. Try saying something like:
<br>• \"Add Math 101 with grade A and 3 credits\"
<br>• \"What's my semester GPA?\"
<br>• \"My previous GPA is 3.5 with 60 credits\"
<br>• Type \"help\" for more examples";

const APOLOGY_TEXT: &str =
    "Sorry, I encountered an error updating your GPA. Please try rephrasing your message.";

/// GPA figures read back from the ledger for a reply.
#[derive(Debug, Clone, PartialEq)]
pub enum GpaReport {
    Semester(AggregateSnapshot),
    Overall(AggregateSnapshot),
    Both {
        semester: AggregateSnapshot,
        overall: AggregateSnapshot,
    },
}

/// Everything a turn can end in.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    CourseAdded {
        course: CourseSlots,
        report: Option<GpaReport>,
    },
    PreviousGpaSet(PreviousGpaSlots),
    Report(GpaReport),
    MissingSlot(SlotError),
    CollaboratorFailure,
    /// Fixed-text intents.
    Canned(Intent),
}

/// Template-based realization of turn outcomes. Output may contain `<strong>`
/// and `<br>` markup, nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResponseComposer;

impl ResponseComposer {
    pub fn new() -> Self {
        Self
    }

    pub fn compose(&self, outcome: &Outcome) -> String {
        match outcome {
            Outcome::CourseAdded { course, report } => {
                let added = self.course_added(course);
                match report {
                    Some(report) => format!("{}<br><br>{}", added, self.report(report)),
                    None => added,
                }
            }
            Outcome::PreviousGpaSet(slots) => format!(
                "Got it! I've set your previous GPA to <strong>{:.2}</strong> with <strong>{}</strong> credits. Your overall GPA has been updated!",
                slots.gpa, slots.credits
            ),
            Outcome::Report(report) => self.report(report),
            Outcome::MissingSlot(missing) => self.missing(missing).to_string(),
            Outcome::CollaboratorFailure => APOLOGY_TEXT.to_string(),
            Outcome::Canned(intent) => self.canned(*intent).to_string(),
        }
    }

    fn course_added(&self, course: &CourseSlots) -> String {
        format!(
            "Perfect! I've added \"<strong>{}</strong>\" with grade <strong>{}</strong> and <strong>{}</strong> credits to your semester courses!",
            course.course_name,
            GradeLexicon::letter_for(course.grade),
            course.credits
        )
    }

    fn report(&self, report: &GpaReport) -> String {
        match report {
            GpaReport::Semester(snap) => format!(
                "Your <strong>Semester GPA</strong> is <strong>{}</strong> based on {} course(s) and {} credits.",
                snap.gpa_text,
                snap.total_courses_text.as_deref().unwrap_or("0"),
                snap.total_credits_text
            ),
            GpaReport::Overall(snap) => format!(
                "Your <strong>Overall GPA</strong> is <strong>{}</strong> with a total of {} credits.",
                snap.gpa_text, snap.total_credits_text
            ),
            GpaReport::Both { semester, overall } => format!(
                "Here are your GPAs:\n<br>• <strong>Semester GPA:</strong> {}\n<br>• <strong>Overall GPA:</strong> {}\n<br><br>Ask me about a specific one for more details!",
                semester.gpa_text, overall.gpa_text
            ),
        }
    }

    fn missing(&self, missing: &SlotError) -> &'static str {
        match missing {
            SlotError::MissingGrade => {
                "I couldn't find a grade. Please specify a grade like A, B+, C, etc. For example: 'Add Math 101 with grade A and 3 credits'"
            }
            SlotError::MissingCredits => {
                "I couldn't find the credit hours. Please specify the number of credits (up to 10). For example: 'Add Math 101 with grade A and 3 credits'"
            }
            SlotError::InsufficientNumbers { .. } => {
                "Please provide both your previous GPA and total credits. For example: 'My previous GPA is 3.5 with 60 credits'"
            }
        }
    }

    fn canned(&self, intent: Intent) -> &'static str {
        match intent {
            Intent::RemoveCourseRedirect => {
                "To remove a course, please use <strong>/remove N</strong> with the number shown by <strong>/courses</strong>."
            }
            Intent::ResetRedirect => {
                "To reset, please use <strong>/reset</strong> to clear your semester courses, or <strong>/reset previous</strong> to clear your previous GPA."
            }
            Intent::Help => HELP_TEXT,
            Intent::Greeting => "Hello! How can I help you with your GPA calculations today?",
            Intent::Thanks => "You're welcome! Let me know if you need anything else.",
            _ => FALLBACK_TEXT,
        }
    }

    /// Strips the inline markup for terminal display.
    pub fn to_plain_text(markup: &str) -> String {
        let text = LINE_BREAK.replace_all(markup, "\n");
        let text = INLINE_TAG.replace_all(&text, "");
        let mut lines: Vec<&str> = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() && lines.last().is_some_and(|l| l.is_empty()) {
                continue;
            }
            lines.push(line);
        }
        lines.join("\n").trim().to_string()
    }
}
