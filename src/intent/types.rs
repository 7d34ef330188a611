use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What one chat message is asking for. Exactly one per utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// "if I take Math with A and 3 credits what is my gpa"
    AddCourseWithGpaQuery,
    AddCourse,
    SetPreviousGpa,
    CalculateGpa,
    RemoveCourseRedirect,
    ResetRedirect,
    Help,
    Greeting,
    Thanks,
    Unrecognized,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Intent::AddCourseWithGpaQuery => "add_course_with_gpa_query",
            Intent::AddCourse => "add_course",
            Intent::SetPreviousGpa => "set_previous_gpa",
            Intent::CalculateGpa => "calculate_gpa",
            Intent::RemoveCourseRedirect => "remove_course_redirect",
            Intent::ResetRedirect => "reset_redirect",
            Intent::Help => "help",
            Intent::Greeting => "greeting",
            Intent::Thanks => "thanks",
            Intent::Unrecognized => "unrecognized",
        };
        f.write_str(label)
    }
}

/// Which GPA figure a read request is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GpaScope {
    Semester,
    Overall,
    Both,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSlots {
    pub course_name: String,
    /// Grade points on the 4.0 scale.
    pub grade: f64,
    pub credits: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreviousGpaSlots {
    pub gpa: f64,
    pub credits: f64,
}

/// Parameters extracted for one intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SlotSet {
    Course(CourseSlots),
    /// Course to add followed by a GPA report in the given scope.
    CourseWithReport(CourseSlots, GpaScope),
    PreviousGpa(PreviousGpaSlots),
    Report(GpaScope),
    Empty,
}

/// A required parameter could not be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotError {
    #[error("no grade found")]
    MissingGrade,
    #[error("no credit count found")]
    MissingCredits,
    #[error("expected {required} numbers, found {found}")]
    InsufficientNumbers { required: usize, found: usize },
}

/// Classification plus slot filling for one utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpretation {
    pub intent: Intent,
    pub numbers: Vec<f64>,
    pub slots: Result<SlotSet, SlotError>,
}
