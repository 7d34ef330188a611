use gradechat::intent::{CourseSlots, Intent, PreviousGpaSlots, SlotError};
use gradechat::ledger::AggregateSnapshot;
use gradechat::outputs::{GpaReport, Outcome, ResponseComposer};
use gradechat::Assistant;

fn snap(gpa: &str, credits: &str, courses: Option<&str>) -> AggregateSnapshot {
    AggregateSnapshot {
        gpa_text: gpa.to_string(),
        total_credits_text: credits.to_string(),
        total_courses_text: courses.map(str::to_string),
    }
}

#[test]
fn test_course_added_message() {
    let reply = ResponseComposer::new().compose(&Outcome::CourseAdded {
        course: CourseSlots {
            course_name: "Biology".to_string(),
            grade: 3.3,
            credits: 4.0,
        },
        report: None,
    });

    assert!(reply.contains("<strong>Biology</strong>"), "{}", reply);
    assert!(reply.contains("<strong>B+</strong>"), "{}", reply);
    // Whole credits print without a decimal
    assert!(reply.contains("<strong>4</strong> credits"), "{}", reply);
}

#[test]
fn test_course_added_with_report() {
    let reply = ResponseComposer::new().compose(&Outcome::CourseAdded {
        course: CourseSlots {
            course_name: "Math".to_string(),
            grade: 4.0,
            credits: 3.5,
        },
        report: Some(GpaReport::Semester(snap("3.43", "7.0", Some("2")))),
    });

    assert!(reply.contains("<strong>3.5</strong> credits"), "{}", reply);
    assert!(reply.contains("<br><br>Your <strong>Semester GPA</strong> is <strong>3.43</strong>"));
    assert!(reply.contains("based on 2 course(s) and 7.0 credits"));
}

#[test]
fn test_previous_gpa_message() {
    let reply = ResponseComposer::new().compose(&Outcome::PreviousGpaSet(PreviousGpaSlots {
        gpa: 3.5,
        credits: 60.0,
    }));

    assert!(reply.contains("<strong>3.50</strong>"), "{}", reply);
    assert!(reply.contains("<strong>60</strong> credits"), "{}", reply);
}

#[test]
fn test_reports() {
    let composer = ResponseComposer::new();

    let overall = GpaReport::Overall(snap("3.42", "75.0", None));
    let overall = composer.compose(&Outcome::Report(overall));
    assert_eq!(
        overall,
        "Your <strong>Overall GPA</strong> is <strong>3.42</strong> with a total of 75.0 credits."
    );

    let both = composer.compose(&Outcome::Report(GpaReport::Both {
        semester: snap("3.43", "7.0", Some("2")),
        overall: snap("3.49", "67.0", None),
    }));
    assert!(both.contains("Semester GPA:</strong> 3.43"));
    assert!(both.contains("Overall GPA:</strong> 3.49"));
}

#[test]
fn test_missing_slot_messages_are_distinct() {
    let composer = ResponseComposer::new();
    let messages: Vec<String> = [
        SlotError::MissingGrade,
        SlotError::MissingCredits,
        SlotError::InsufficientNumbers { required: 2, found: 1 },
    ]
    .into_iter()
    .map(|e| composer.compose(&Outcome::MissingSlot(e)))
    .collect();

    assert_ne!(messages[0], messages[1]);
    assert_ne!(messages[1], messages[2]);
    assert_ne!(messages[0], messages[2]);
}

/// The quoted utterance after "For example: ".
fn example_utterance(message: &str) -> Option<&str> {
    let start = message.find("For example: '")? + "For example: '".len();
    let len = message[start..].find('\'')?;
    Some(&message[start..start + len])
}

#[test]
fn test_missing_slot_examples_are_complete_requests() {
    let composer = ResponseComposer::new();
    let assistant = Assistant::default();

    for (missing, intent) in [
        (SlotError::MissingGrade, Intent::AddCourse),
        (SlotError::MissingCredits, Intent::AddCourse),
        (SlotError::InsufficientNumbers { required: 2, found: 1 }, Intent::SetPreviousGpa),
    ] {
        let message = composer.compose(&Outcome::MissingSlot(missing));
        let example = example_utterance(&message)
            .unwrap_or_else(|| panic!("no example utterance in: {}", message));

        // Sending the example back must succeed
        let interpretation = assistant.interpret(example);
        assert_eq!(interpretation.intent, intent, "example '{}'", example);
        assert!(interpretation.slots.is_ok(), "example '{}': {:?}", example, interpretation.slots);
    }
}

#[test]
fn test_canned_replies() {
    let composer = ResponseComposer::new();

    assert_eq!(
        composer.compose(&Outcome::Canned(Intent::Greeting)),
        "Hello! How can I help you with your GPA calculations today?"
    );
    assert!(composer.compose(&Outcome::Canned(Intent::Thanks)).starts_with("You're welcome!"));
    assert!(composer.compose(&Outcome::Canned(Intent::RemoveCourseRedirect)).contains("/remove"));
    let reset = composer.compose(&Outcome::Canned(Intent::ResetRedirect));
    assert!(reset.contains("<strong>/reset</strong> to clear your semester courses"), "{}", reset);
    assert!(reset.contains("<strong>/reset previous</strong>"), "{}", reset);
    assert!(composer.compose(&Outcome::Canned(Intent::Unrecognized)).contains("help"));
    assert!(composer
        .compose(&Outcome::CollaboratorFailure)
        .starts_with("Sorry, I encountered an error"));
}

#[test]
fn test_plain_text_rendering() {
    let help = ResponseComposer::new().compose(&Outcome::Canned(Intent::Help));
    let plain = ResponseComposer::to_plain_text(&help);

    assert!(!plain.contains("<strong>"));
    assert!(!plain.contains("<br"));
    assert!(plain.starts_with("I can help you with:"));
    assert!(plain.contains("Adding Courses:\n• \"Add Math 101 with grade A and 3 credits\""));
    assert!(!plain.contains("\n\n\n"), "no runs of blank lines: {:?}", plain);
}
