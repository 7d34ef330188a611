use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(pub Uuid);

impl CourseId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CourseId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub id: CourseId,
    pub name: String,
    /// Grade points, 0.0 - 4.0
    pub grade: f64,
    pub credits: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateScope {
    Semester,
    Overall,
}

/// Display-ready aggregate figures (GPA to 2 decimals, credits to 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateSnapshot {
    pub gpa_text: String,
    pub total_credits_text: String,
    /// Only reported for the semester scope.
    pub total_courses_text: Option<String>,
}

/// Raw weighted-mean result.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GpaFigure {
    pub gpa: f64,
    pub credits: f64,
}

impl GpaFigure {
    /// Credit-weighted mean of (grade points, credits) pairs; 0 when there are no credits.
    pub fn weighted<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (points, credits) = pairs
            .into_iter()
            .fold((0.0, 0.0), |(p, c), (grade, credits)| (p + grade * credits, c + credits));
        let gpa = if credits > 0.0 { points / credits } else { 0.0 };
        Self { gpa, credits }
    }
}
