use gradechat::intent::{
    CourseSlots, GpaScope, Intent, PreviousGpaSlots, SlotError, SlotFiller, SlotSet,
};
use gradechat::nlp::{NumericTokenExtractor, Utterance};

fn fill(intent: Intent, text: &str) -> Result<SlotSet, SlotError> {
    let utterance = Utterance::new(text);
    let numbers = NumericTokenExtractor::default().extract(text);
    SlotFiller::new().fill(intent, &utterance, &numbers)
}

#[test]
fn test_course_slots() {
    let slots = fill(Intent::AddCourse, "Add Biology with B+ and 4 credits");
    assert_eq!(
        slots,
        Ok(SlotSet::Course(CourseSlots {
            course_name: "Biology".to_string(),
            grade: 3.3,
            credits: 4.0,
        }))
    );
}

#[test]
fn test_course_code_digits_are_not_credits() {
    match fill(Intent::AddCourse, "add Math 161A with grade A and 3 credits") {
        Ok(SlotSet::Course(slots)) => {
            assert_eq!(slots.course_name, "Math 161A");
            assert_eq!(slots.credits, 3.0);
        }
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn test_missing_grade_reported_first() {
    assert_eq!(
        fill(Intent::AddCourse, "add Chemistry with 3 credits"),
        Err(SlotError::MissingGrade)
    );
    // Neither grade nor credits: grade wins
    assert_eq!(fill(Intent::AddCourse, "add Chemistry"), Err(SlotError::MissingGrade));
}

#[test]
fn test_missing_credits() {
    assert_eq!(
        fill(Intent::AddCourse, "add Physics class with grade A"),
        Err(SlotError::MissingCredits)
    );
    // Out of the per-course range
    assert_eq!(
        fill(Intent::AddCourse, "add Art with grade B and 12 credits"),
        Err(SlotError::MissingCredits)
    );
}

#[test]
fn test_number_equal_to_grade_is_never_credits() {
    assert_eq!(SlotFiller::credits(&[4.0], Some(4.0)), None);
    assert_eq!(SlotFiller::credits(&[4.0, 3.0], Some(4.0)), Some(3.0));
    assert_eq!(SlotFiller::credits(&[4.0], Some(3.3)), Some(4.0));
    assert_eq!(SlotFiller::credits(&[4.0], None), Some(4.0));

    // The word "credits" does not lift the exclusion
    assert_eq!(
        fill(Intent::AddCourse, "add Math with grade A and 4 credits"),
        Err(SlotError::MissingCredits)
    );
}

#[test]
fn test_course_number_matching_grade_is_skipped() {
    assert_eq!(
        fill(Intent::AddCourse, "add Physics 4 with grade A and 3 credits"),
        Ok(SlotSet::Course(CourseSlots {
            course_name: "Physics 4".to_string(),
            grade: 4.0,
            credits: 3.0,
        }))
    );
}

#[test]
fn test_previous_gpa_by_magnitude() {
    let expected = Ok(PreviousGpaSlots { gpa: 3.5, credits: 60.0 });

    assert_eq!(SlotFiller::previous_gpa(&[3.5, 60.0]), expected);
    assert_eq!(SlotFiller::previous_gpa(&[60.0, 3.5]), expected);
    assert_eq!(
        SlotFiller::previous_gpa(&[45.0, 3.2, 10.0]),
        Ok(PreviousGpaSlots { gpa: 3.2, credits: 45.0 })
    );
}

#[test]
fn test_previous_gpa_positional_fallback() {
    // Both look like GPAs: first is GPA, second is credits
    assert_eq!(
        SlotFiller::previous_gpa(&[2.0, 3.0]),
        Ok(PreviousGpaSlots { gpa: 2.0, credits: 3.0 })
    );
    // Both exceed the scale: swapped so the smaller one is tried as GPA
    assert_eq!(
        SlotFiller::previous_gpa(&[5.0, 6.0]),
        Ok(PreviousGpaSlots { gpa: 6.0, credits: 5.0 })
    );
}

#[test]
fn test_previous_gpa_needs_two_numbers() {
    assert_eq!(
        SlotFiller::previous_gpa(&[3.5]),
        Err(SlotError::InsufficientNumbers { required: 2, found: 1 })
    );
    assert_eq!(
        fill(Intent::SetPreviousGpa, "my previous gpa was good"),
        Err(SlotError::InsufficientNumbers { required: 2, found: 0 })
    );
}

#[test]
fn test_previous_gpa_from_text() {
    assert_eq!(
        fill(Intent::SetPreviousGpa, "My previous GPA is 3.5 with 60 credits"),
        Ok(SlotSet::PreviousGpa(PreviousGpaSlots { gpa: 3.5, credits: 60.0 }))
    );
}

#[test]
fn test_scope() {
    let scope = |text: &str| SlotFiller::scope(&Utterance::new(text));

    assert_eq!(scope("what is my semester gpa"), GpaScope::Semester);
    assert_eq!(scope("my current gpa"), GpaScope::Semester);
    assert_eq!(scope("cumulative gpa please"), GpaScope::Overall);
    assert_eq!(scope("what's my Overall GPA"), GpaScope::Overall);
    assert_eq!(scope("what's my gpa"), GpaScope::Both);
    // Semester words are checked first
    assert_eq!(scope("current and overall gpa"), GpaScope::Semester);
}

#[test]
fn test_course_with_report() {
    assert_eq!(
        fill(
            Intent::AddCourseWithGpaQuery,
            "if I take Math with A and 3 credits what is my semester gpa"
        ),
        Ok(SlotSet::CourseWithReport(
            CourseSlots {
                course_name: "Math".to_string(),
                grade: 4.0,
                credits: 3.0,
            },
            GpaScope::Semester,
        ))
    );
}

#[test]
fn test_parameterless_intents() {
    for intent in [
        Intent::RemoveCourseRedirect,
        Intent::ResetRedirect,
        Intent::Help,
        Intent::Greeting,
        Intent::Thanks,
        Intent::Unrecognized,
    ] {
        assert_eq!(fill(intent, "anything at all 42"), Ok(SlotSet::Empty), "{}", intent);
    }
    assert_eq!(
        fill(Intent::CalculateGpa, "show my overall gpa"),
        Ok(SlotSet::Report(GpaScope::Overall))
    );
}
