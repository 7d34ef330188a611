use tracing::{debug, warn};

use crate::config::AssistantConfig;
use crate::intent::{GpaScope, Intent, IntentClassifier, Interpretation, SlotFiller, SlotSet};
use crate::kernel::telemetry::MutationKind;
use crate::ledger::{AggregateScope, GpaLedger, LedgerError};
use crate::nlp::{NumericTokenExtractor, Utterance};
use crate::outputs::{GpaReport, Outcome, ResponseComposer};

/// Result of one turn, before delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnResult {
    pub intent: Intent,
    pub numeric_tokens: usize,
    pub outcome: Outcome,
    /// Set when the ledger accepted a change.
    pub mutation: Option<MutationKind>,
    pub reply: String,
}

/// The turn pipeline: numbers → intent → slots → ledger call → reply text.
///
/// Holds no per-conversation state; the ledger is passed in for every turn.
pub struct Assistant {
    numbers: NumericTokenExtractor,
    classifier: IntentClassifier,
    filler: SlotFiller,
    composer: ResponseComposer,
}

impl Default for Assistant {
    fn default() -> Self {
        Self::with_numbers(NumericTokenExtractor::default())
    }
}

impl Assistant {
    pub fn new(config: &AssistantConfig) -> Self {
        Self::with_numbers(NumericTokenExtractor::new(config.numeric_toolkit))
    }

    pub fn with_numbers(numbers: NumericTokenExtractor) -> Self {
        Self {
            numbers,
            classifier: IntentClassifier::new(),
            filler: SlotFiller::new(),
            composer: ResponseComposer::new(),
        }
    }

    /// Classification and slot filling only. No side effects.
    pub fn interpret(&self, text: &str) -> Interpretation {
        let utterance = Utterance::new(text);
        let numbers = self.numbers.extract(utterance.original());
        let intent = self.classifier.classify(utterance.lowered(), numbers.len());
        let slots = self.filler.fill(intent, &utterance, &numbers);
        debug!(%intent, tokens = numbers.len(), ok = slots.is_ok(), "utterance interpreted");

        Interpretation { intent, numbers, slots }
    }

    /// Runs a full turn against `ledger`. Never fails: every error becomes a reply.
    pub fn respond<L>(&self, text: &str, ledger: &mut L) -> TurnResult
    where
        L: GpaLedger + ?Sized,
    {
        let Interpretation { intent, numbers, slots } = self.interpret(text);
        let mut mutation = None;

        let outcome = match slots {
            Err(missing) => Outcome::MissingSlot(missing),
            Ok(SlotSet::Course(course)) => {
                match ledger.append_course(&course.course_name, course.grade, course.credits) {
                    Ok(()) => {
                        mutation = Some(MutationKind::CourseAppended);
                        Outcome::CourseAdded { course, report: None }
                    }
                    Err(e) => Self::collaborator_failure(intent, e),
                }
            }
            Ok(SlotSet::CourseWithReport(course, scope)) => {
                match ledger.append_course(&course.course_name, course.grade, course.credits) {
                    Ok(()) => {
                        mutation = Some(MutationKind::CourseAppended);
                        let report = Some(Self::report(scope, ledger));
                        Outcome::CourseAdded { course, report }
                    }
                    Err(e) => Self::collaborator_failure(intent, e),
                }
            }
            Ok(SlotSet::PreviousGpa(previous)) => {
                match ledger.set_previous_gpa(previous.gpa, previous.credits) {
                    Ok(()) => {
                        mutation = Some(MutationKind::PreviousGpaSet);
                        Outcome::PreviousGpaSet(previous)
                    }
                    Err(e) => Self::collaborator_failure(intent, e),
                }
            }
            Ok(SlotSet::Report(scope)) => Outcome::Report(Self::report(scope, ledger)),
            Ok(SlotSet::Empty) => Outcome::Canned(intent),
        };

        let reply = self.composer.compose(&outcome);
        TurnResult {
            intent,
            numeric_tokens: numbers.len(),
            outcome,
            mutation,
            reply,
        }
    }

    fn report<L>(scope: GpaScope, ledger: &L) -> GpaReport
    where
        L: GpaLedger + ?Sized,
    {
        match scope {
            GpaScope::Semester => {
                GpaReport::Semester(ledger.read_aggregate(AggregateScope::Semester))
            }
            GpaScope::Overall => GpaReport::Overall(ledger.read_aggregate(AggregateScope::Overall)),
            GpaScope::Both => GpaReport::Both {
                semester: ledger.read_aggregate(AggregateScope::Semester),
                overall: ledger.read_aggregate(AggregateScope::Overall),
            },
        }
    }

    fn collaborator_failure(intent: Intent, error: LedgerError) -> Outcome {
        warn!(%intent, "Ledger rejected update: {}", error);
        Outcome::CollaboratorFailure
    }
}
