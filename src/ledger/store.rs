use thiserror::Error;
use tracing::debug;

use super::types::{AggregateScope, AggregateSnapshot, CourseId, CourseRecord, GpaFigure};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error("course name must not be empty")]
    EmptyCourseName,
    #[error("grade points must be between 0 and 4, got {0}")]
    InvalidGrade(f64),
    #[error("credits must be a positive number, got {0}")]
    InvalidCredits(f64),
    #[error("previous GPA must be between 0 and 4, got {0}")]
    InvalidPreviousGpa(f64),
    #[error("course not found")]
    NotFound,
}

/// The owner of the course list and GPA totals. The chat core only calls in;
/// every mutation recomputes both aggregates.
pub trait GpaLedger {
    fn append_course(
        &mut self,
        name: &str,
        grade_points: f64,
        credits: f64,
    ) -> Result<(), LedgerError>;
    fn set_previous_gpa(&mut self, gpa: f64, credits: f64) -> Result<(), LedgerError>;
    fn read_aggregate(&self, scope: AggregateScope) -> AggregateSnapshot;
}

/// In-memory ledger: one semester's courses plus a previous GPA/credit pair.
#[derive(Debug, Default, Clone)]
pub struct InMemoryLedger {
    courses: Vec<CourseRecord>,
    previous: GpaFigure,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn courses(&self) -> &[CourseRecord] {
        &self.courses
    }

    pub fn previous(&self) -> GpaFigure {
        self.previous
    }

    pub fn remove_course(&mut self, id: CourseId) -> Result<CourseRecord, LedgerError> {
        let idx = self
            .courses
            .iter()
            .position(|c| c.id == id)
            .ok_or(LedgerError::NotFound)?;
        Ok(self.courses.remove(idx))
    }

    /// Drops every semester course. Returns how many were removed.
    pub fn reset_semester(&mut self) -> usize {
        let removed = self.courses.len();
        self.courses.clear();
        removed
    }

    pub fn clear_previous(&mut self) {
        self.previous = GpaFigure::default();
    }

    pub fn semester(&self) -> GpaFigure {
        GpaFigure::weighted(self.courses.iter().map(|c| (c.grade, c.credits)))
    }

    /// Previous record and this semester combined.
    pub fn overall(&self) -> GpaFigure {
        let semester = self.semester();
        GpaFigure::weighted([
            (self.previous.gpa, self.previous.credits),
            (semester.gpa, semester.credits),
        ])
    }
}

impl GpaLedger for InMemoryLedger {
    fn append_course(
        &mut self,
        name: &str,
        grade_points: f64,
        credits: f64,
    ) -> Result<(), LedgerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::EmptyCourseName);
        }
        if !grade_points.is_finite() || !(0.0..=4.0).contains(&grade_points) {
            return Err(LedgerError::InvalidGrade(grade_points));
        }
        if !credits.is_finite() || credits <= 0.0 {
            return Err(LedgerError::InvalidCredits(credits));
        }

        self.courses.push(CourseRecord {
            id: CourseId::new(),
            name: name.to_string(),
            grade: grade_points,
            credits,
        });
        debug!(courses = self.courses.len(), "course appended");
        Ok(())
    }

    fn set_previous_gpa(&mut self, gpa: f64, credits: f64) -> Result<(), LedgerError> {
        if !gpa.is_finite() || !(0.0..=4.0).contains(&gpa) {
            return Err(LedgerError::InvalidPreviousGpa(gpa));
        }
        if !credits.is_finite() || credits < 0.0 {
            return Err(LedgerError::InvalidCredits(credits));
        }
        self.previous = GpaFigure { gpa, credits };
        Ok(())
    }

    fn read_aggregate(&self, scope: AggregateScope) -> AggregateSnapshot {
        match scope {
            AggregateScope::Semester => {
                if self.courses.is_empty() {
                    return AggregateSnapshot {
                        gpa_text: "0.00".to_string(),
                        total_credits_text: "0".to_string(),
                        total_courses_text: Some("0".to_string()),
                    };
                }
                let semester = self.semester();
                AggregateSnapshot {
                    gpa_text: format!("{:.2}", semester.gpa),
                    total_credits_text: format!("{:.1}", semester.credits),
                    total_courses_text: Some(self.courses.len().to_string()),
                }
            }
            AggregateScope::Overall => {
                let overall = self.overall();
                AggregateSnapshot {
                    gpa_text: format!("{:.2}", overall.gpa),
                    total_credits_text: format!("{:.1}", overall.credits),
                    total_courses_text: None,
                }
            }
        }
    }
}
