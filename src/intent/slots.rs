use super::types::{CourseSlots, GpaScope, Intent, PreviousGpaSlots, SlotError, SlotSet};
use crate::nlp::{CourseNameExtractor, GradeLexicon, Utterance};

/// Largest credit count accepted for a single course.
pub const MAX_COURSE_CREDITS: f64 = 10.0;
/// Upper bound of the grade-point scale.
pub const MAX_GPA: f64 = 4.0;

pub const SEMESTER_WORDS: &[&str] = &["semester", "current"];
pub const OVERALL_WORDS: &[&str] = &["overall", "cumulative", "total"];

/// Turns an utterance and its numeric tokens into the parameters an intent needs.
#[derive(Debug, Default, Clone, Copy)]
pub struct SlotFiller {
    names: CourseNameExtractor,
}

impl SlotFiller {
    pub fn new() -> Self {
        Self {
            names: CourseNameExtractor::new(),
        }
    }

    pub fn fill(
        &self,
        intent: Intent,
        utterance: &Utterance,
        numbers: &[f64],
    ) -> Result<SlotSet, SlotError> {
        match intent {
            Intent::AddCourse => self.course(utterance, numbers).map(SlotSet::Course),
            Intent::AddCourseWithGpaQuery => {
                let course = self.course(utterance, numbers)?;
                Ok(SlotSet::CourseWithReport(course, Self::scope(utterance)))
            }
            Intent::SetPreviousGpa => Self::previous_gpa(numbers).map(SlotSet::PreviousGpa),
            Intent::CalculateGpa => Ok(SlotSet::Report(Self::scope(utterance))),
            Intent::RemoveCourseRedirect
            | Intent::ResetRedirect
            | Intent::Help
            | Intent::Greeting
            | Intent::Thanks
            | Intent::Unrecognized => Ok(SlotSet::Empty),
        }
    }

    pub fn course(&self, utterance: &Utterance, numbers: &[f64]) -> Result<CourseSlots, SlotError> {
        let course_name = self.names.extract(utterance);
        let grade = GradeLexicon::standard().lookup(utterance.lowered());
        let credits = Self::credits(numbers, grade);

        let grade = grade.ok_or(SlotError::MissingGrade)?;
        let credits = credits.ok_or(SlotError::MissingCredits)?;

        Ok(CourseSlots {
            course_name,
            grade,
            credits,
        })
    }

    /// First value in (0, 10] that is not the grade points written as a number.
    ///
    /// First match in token order; position relative to "credit" is not used.
    pub fn credits(numbers: &[f64], grade: Option<f64>) -> Option<f64> {
        numbers
            .iter()
            .copied()
            .filter(|n| *n > 0.0 && *n <= MAX_COURSE_CREDITS)
            .find(|n| Some(*n) != grade)
    }

    /// GPA and credit total, told apart by magnitude before position.
    pub fn previous_gpa(numbers: &[f64]) -> Result<PreviousGpaSlots, SlotError> {
        if numbers.len() < 2 {
            return Err(SlotError::InsufficientNumbers {
                required: 2,
                found: numbers.len(),
            });
        }

        let mut gpa = None;
        let mut credits = None;
        for &n in numbers {
            if (0.0..=MAX_GPA).contains(&n) && gpa.is_none() {
                gpa = Some(n);
            } else if n > MAX_GPA && credits.is_none() {
                credits = Some(n);
            }
        }

        let (mut gpa, mut credits) = match (gpa, credits) {
            (Some(g), Some(c)) => (g, c),
            _ => (numbers[0], numbers[1]),
        };
        if gpa > MAX_GPA {
            std::mem::swap(&mut gpa, &mut credits);
        }

        Ok(PreviousGpaSlots { gpa, credits })
    }

    pub fn scope(utterance: &Utterance) -> GpaScope {
        if SEMESTER_WORDS.iter().any(|w| utterance.mentions(w)) {
            GpaScope::Semester
        } else if OVERALL_WORDS.iter().any(|w| utterance.mentions(w)) {
            GpaScope::Overall
        } else {
            GpaScope::Both
        }
    }
}
