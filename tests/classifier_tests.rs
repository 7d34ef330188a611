use gradechat::intent::classifier::{Signals, RULES};
use gradechat::intent::{Intent, SlotError, SlotSet};
use gradechat::Assistant;

fn classify(text: &str) -> Intent {
    Assistant::default().interpret(text).intent
}

#[test]
fn test_rule_table_order() {
    let intents: Vec<Intent> = RULES.iter().map(|r| r.intent).collect();
    assert_eq!(
        intents,
        vec![
            Intent::AddCourseWithGpaQuery,
            Intent::AddCourse,
            Intent::AddCourse,
            Intent::SetPreviousGpa,
            Intent::CalculateGpa,
            Intent::RemoveCourseRedirect,
            Intent::ResetRedirect,
            Intent::Help,
            Intent::Greeting,
            Intent::Thanks,
        ]
    );
}

#[test]
fn test_add_course() {
    assert_eq!(classify("Add Math 101 with grade A and 3 credits"), Intent::AddCourse);
    assert_eq!(classify("take Physics with B and 4 credits"), Intent::AddCourse);
    assert_eq!(classify("add a new course"), Intent::AddCourse);
}

#[test]
fn test_add_course_with_question_wins() {
    assert_eq!(
        classify("if I take Math with A and 3 credits what is my gpa"),
        Intent::AddCourseWithGpaQuery
    );
    assert_eq!(
        classify("add Math with A and 3 credits, how does that change my gpa"),
        Intent::AddCourseWithGpaQuery
    );
}

#[test]
fn test_previous_gpa() {
    assert_eq!(classify("My previous GPA is 3.5 with 60 credits"), Intent::SetPreviousGpa);
    assert_eq!(classify("my gpa was 3.2 over 45 credits"), Intent::SetPreviousGpa);
}

#[test]
fn test_gpa_queries() {
    assert_eq!(classify("What's my overall GPA?"), Intent::CalculateGpa);
    assert_eq!(classify("show my semester GPA"), Intent::CalculateGpa);
}

#[test]
fn test_redirects() {
    assert_eq!(classify("remove the biology course"), Intent::RemoveCourseRedirect);
    assert_eq!(classify("delete everything"), Intent::ResetRedirect);
    // Rule 6 is checked before rule 7
    assert_eq!(classify("delete all courses"), Intent::RemoveCourseRedirect);
}

#[test]
fn test_conversational() {
    assert_eq!(classify("help"), Intent::Help);
    assert_eq!(classify("what can you do"), Intent::Help);
    assert_eq!(classify("hello there"), Intent::Greeting);
    assert_eq!(classify("Hi"), Intent::Greeting);
    assert_eq!(classify("thanks!"), Intent::Thanks);
    assert_eq!(classify("thank you so much"), Intent::Thanks);
}

#[test]
fn test_unrecognized() {
    assert_eq!(classify("purple monkey dishwasher"), Intent::Unrecognized);
    assert_eq!(classify("this is nice"), Intent::Unrecognized);
    assert_eq!(classify("asdf"), Intent::Unrecognized);
}

#[test]
fn test_credit_indicator_needs_a_number() {
    let with_number = Signals::new("add chem with b and 3 credits", 1);
    let without_number = Signals::new("add chem with b and some credits", 0);

    assert!(with_number.has_credit_indicator());
    assert!(!without_number.has_credit_indicator());
    assert!(!without_number.has_course_info());
}

#[test]
fn test_well_formed_add_requests() {
    let verbs = ["add", "enter", "take", "register"];
    let names = ["Biology", "Art History", "Math 161A"];
    let grades = [("A", 4.0), ("B+", 3.3), ("C-", 1.7), ("D", 1.0), ("F", 0.0)];
    let assistant = Assistant::default();

    for verb in verbs {
        for name in names {
            for (grade, points) in grades {
                for credits in 1..=10 {
                    let text =
                        format!("{} {} with grade {} and {} credits", verb, name, grade, credits);
                    let interpretation = assistant.interpret(&text);

                    assert_eq!(interpretation.intent, Intent::AddCourse, "intent for '{}'", text);
                    match interpretation.slots {
                        // "A ... 4 credits": the count collides with the grade points
                        Err(SlotError::MissingCredits) if credits as f64 == points => {}
                        Ok(SlotSet::Course(slots)) => {
                            assert_eq!(slots.course_name, name, "name for '{}'", text);
                            assert_eq!(slots.grade, points, "grade for '{}'", text);
                            assert_eq!(slots.credits, credits as f64, "credits for '{}'", text);
                        }
                        other => panic!("unexpected slots for '{}': {:?}", text, other),
                    }
                }
            }
        }
    }
}

#[test]
fn test_interpretation_is_idempotent() {
    let assistant = Assistant::default();
    let text = "Add Biology with B+ and 4 credits";

    assert_eq!(assistant.interpret(text), assistant.interpret(text));
}
