//! Booking form state machine.
//!
//! The machine decides, the view executes. [`BookingMachine::decide`] takes
//! one event, moves to the next state and returns at most one
//! [`BookingCommand`] for the view layer to carry out (show a prompt, start
//! the confirmation pause, navigate). It performs no IO itself.
//!
//! ```text
//! Loading ──► NotFound | Unavailable        (terminal)
//!    │
//!    └──► Ready ──Submit(valid)──► Submitting ──DelayElapsed──► Submitted
//!          ▲ │
//!          └─┘ Edit, Submit(invalid)
//! ```
//!
//! Nothing is sent anywhere and nothing is persisted; a booking only exists
//! for as long as the view that owns the machine.

use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::ValidationError;
use crate::lookup::parse_provider_id;
use crate::navigation::{Destination, RouteContext};
use crate::store::LoadState;
use crate::types::{Provider, ProviderId};

/// Shown when a submission is attempted with empty fields.
pub const MISSING_FIELDS_PROMPT: &str = "Please fill out all fields.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    Name,
    Age,
    Date,
}

impl BookingField {
    pub const ALL: [BookingField; 3] = [BookingField::Name, BookingField::Age, BookingField::Date];

    /// Form label.
    pub fn label(&self) -> &'static str {
        match self {
            BookingField::Name => "Your Name",
            BookingField::Age => "Your Age",
            BookingField::Date => "Appointment Date",
        }
    }

    /// Input `name` attribute.
    pub fn key(&self) -> &'static str {
        match self {
            BookingField::Name => "name",
            BookingField::Age => "age",
            BookingField::Date => "date",
        }
    }
}

/// Patient-entered, unsaved form data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub name: String,
    pub age: String,
    /// Calendar date as produced by a date input (`YYYY-MM-DD`).
    pub date: String,
}

impl BookingDraft {
    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.name,
            BookingField::Age => &self.age,
            BookingField::Date => &self.date,
        }
    }

    pub fn set(&mut self, field: BookingField, value: impl Into<String>) {
        let value = value.into();
        match field {
            BookingField::Name => self.name = value,
            BookingField::Age => self.age = value,
            BookingField::Date => self.date = value,
        }
    }

    pub fn missing_fields(&self) -> Vec<BookingField> {
        BookingField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    /// Completeness only: every field must be non-empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }

    pub fn requested_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    /// Human-readable date for the confirmation notice. Falls back to the raw
    /// input when it is not an ISO date.
    pub fn display_date(&self) -> String {
        self.requested_date()
            .map(|d| d.format("%A, %B %-d, %Y").to_string())
            .unwrap_or_else(|| self.date.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingState {
    /// Waiting for the directory to load.
    Loading { id: ProviderId },
    /// Id absent, malformed, or not in the loaded directory. Terminal.
    NotFound,
    /// The directory failed to load. Terminal.
    Unavailable { message: String },
    /// Accepting edits.
    Ready { provider: Provider, draft: BookingDraft },
    /// Accepted; the confirmation pause is running.
    Submitting { provider: Provider, draft: BookingDraft },
    Submitted { provider: Provider, draft: BookingDraft },
}

impl BookingState {
    pub fn name(&self) -> &'static str {
        match self {
            BookingState::Loading { .. } => "loading",
            BookingState::NotFound => "not_found",
            BookingState::Unavailable { .. } => "unavailable",
            BookingState::Ready { .. } => "ready",
            BookingState::Submitting { .. } => "submitting",
            BookingState::Submitted { .. } => "submitted",
        }
    }

    pub fn provider(&self) -> Option<&Provider> {
        match self {
            BookingState::Ready { provider, .. }
            | BookingState::Submitting { provider, .. }
            | BookingState::Submitted { provider, .. } => Some(provider),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&BookingDraft> {
        match self {
            BookingState::Ready { draft, .. }
            | BookingState::Submitting { draft, .. }
            | BookingState::Submitted { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// True once a submission has been accepted.
    pub fn is_submitted(&self) -> bool {
        matches!(
            self,
            BookingState::Submitting { .. } | BookingState::Submitted { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingEvent {
    /// The directory load settled.
    Loaded(LoadState),
    Edit { field: BookingField, value: String },
    Submit,
    /// The confirmation pause finished.
    DelayElapsed,
}

impl BookingEvent {
    pub fn edit(field: BookingField, value: impl Into<String>) -> Self {
        BookingEvent::Edit {
            field,
            value: value.into(),
        }
    }
}

/// Work the view layer must carry out on the machine's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingCommand {
    /// Blocking user-visible message.
    Prompt(String),
    /// Wait, then feed back [`BookingEvent::DelayElapsed`].
    ScheduleConfirmation(Duration),
    Navigate(Destination),
}

/// Booking flow for one provider's form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingMachine {
    state: BookingState,
    confirmation_delay: Duration,
}

impl BookingMachine {
    /// Start a flow for the raw `:id` route parameter.
    pub fn activate(raw_id: Option<&str>, confirmation_delay: Duration) -> Self {
        let state = match parse_provider_id(raw_id) {
            Some(id) => BookingState::Loading { id },
            None => {
                debug!(raw_id, "Booking activated with unusable provider id");
                BookingState::NotFound
            }
        };

        Self {
            state,
            confirmation_delay,
        }
    }

    pub fn from_route<R: RouteContext + ?Sized>(route: &R, confirmation_delay: Duration) -> Self {
        Self::activate(route.param("id").as_deref(), confirmation_delay)
    }

    pub fn state(&self) -> &BookingState {
        &self.state
    }

    pub fn confirmation_delay(&self) -> Duration {
        self.confirmation_delay
    }

    /// Apply one event. Events that make no sense in the current state are
    /// ignored and produce no command.
    pub fn decide(&mut self, event: &BookingEvent) -> Option<BookingCommand> {
        let current = std::mem::replace(&mut self.state, BookingState::NotFound);
        let from = current.name();

        let (next, command) = transition(current, event, self.confirmation_delay);
        if from != next.name() {
            debug!(from, to = next.name(), "Booking state changed");
        }

        self.state = next;
        command
    }
}

fn transition(
    state: BookingState,
    event: &BookingEvent,
    confirmation_delay: Duration,
) -> (BookingState, Option<BookingCommand>) {
    use BookingEvent as E;
    use BookingState as S;

    match (state, event) {
        (S::Loading { id }, E::Loaded(load)) => match load {
            LoadState::Loading => (S::Loading { id }, None),
            LoadState::Failed(message) => (
                S::Unavailable {
                    message: message.clone(),
                },
                None,
            ),
            LoadState::Loaded(snapshot) => match snapshot.find(id) {
                Some(provider) => (
                    S::Ready {
                        provider: provider.clone(),
                        draft: BookingDraft::default(),
                    },
                    None,
                ),
                None => {
                    debug!(%id, "Provider not in directory");
                    (S::NotFound, None)
                }
            },
        },

        (S::Ready { provider, mut draft }, E::Edit { field, value }) => {
            draft.set(*field, value.clone());
            (S::Ready { provider, draft }, None)
        }

        (S::Ready { provider, draft }, E::Submit) => match draft.validate() {
            Ok(()) => {
                info!(provider_id = %provider.id, "Booking accepted");
                (
                    S::Submitting { provider, draft },
                    Some(BookingCommand::ScheduleConfirmation(confirmation_delay)),
                )
            }
            Err(e) => {
                warn!(provider_id = %provider.id, error = %e, "Booking rejected");
                let prompt = format!("{}\n{}", MISSING_FIELDS_PROMPT, e);
                (S::Ready { provider, draft }, Some(BookingCommand::Prompt(prompt)))
            }
        },

        (S::Submitting { provider, draft }, E::DelayElapsed) => (
            S::Submitted { provider, draft },
            Some(BookingCommand::Navigate(Destination::Confirmation)),
        ),

        (state, _) => (state, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::fixtures::*;

    const DELAY: Duration = Duration::from_millis(10);

    fn ready_for(id: &str) -> BookingMachine {
        let mut machine = BookingMachine::activate(Some(id), DELAY);
        machine.decide(&BookingEvent::Loaded(LoadState::Loaded(alice_and_bob())));
        machine
    }

    fn fill(machine: &mut BookingMachine, name: &str, age: &str, date: &str) {
        machine.decide(&BookingEvent::edit(BookingField::Name, name));
        machine.decide(&BookingEvent::edit(BookingField::Age, age));
        machine.decide(&BookingEvent::edit(BookingField::Date, date));
    }

    #[test]
    fn test_activate_with_malformed_id_is_not_found() {
        assert_eq!(BookingMachine::activate(Some("bob"), DELAY).state(), &BookingState::NotFound);
        assert_eq!(BookingMachine::activate(None, DELAY).state(), &BookingState::NotFound);
    }

    #[test]
    fn test_loaded_with_match_is_ready() {
        let machine = ready_for("2");
        assert_eq!(machine.state().name(), "ready");
        assert_eq!(machine.state().provider().unwrap().name, "Bob");
        assert_eq!(machine.state().draft(), Some(&BookingDraft::default()));
    }

    #[test]
    fn test_loaded_without_match_is_not_found() {
        let machine = ready_for("99");
        assert_eq!(machine.state(), &BookingState::NotFound);
    }

    #[test]
    fn test_load_failure_is_unavailable() {
        let mut machine = BookingMachine::activate(Some("1"), DELAY);
        machine.decide(&BookingEvent::Loaded(LoadState::Failed("offline".into())));
        assert_eq!(
            machine.state(),
            &BookingState::Unavailable {
                message: "offline".into()
            }
        );
    }

    #[test]
    fn test_edits_are_independent() {
        let mut machine = ready_for("1");
        machine.decide(&BookingEvent::edit(BookingField::Name, "Pat"));
        machine.decide(&BookingEvent::edit(BookingField::Date, "2026-11-02"));
        machine.decide(&BookingEvent::edit(BookingField::Name, "Patricia"));

        let draft = machine.state().draft().unwrap();
        assert_eq!(draft.name, "Patricia");
        assert_eq!(draft.age, "");
        assert_eq!(draft.date, "2026-11-02");
    }

    #[test]
    fn test_submit_with_missing_field_prompts_and_keeps_draft() {
        let mut machine = ready_for("1");
        fill(&mut machine, "Pat", "", "2026-11-02");

        let command = machine.decide(&BookingEvent::Submit);
        match command {
            Some(BookingCommand::Prompt(text)) => {
                assert!(text.starts_with(MISSING_FIELDS_PROMPT));
                assert!(text.contains("Your Age"));
                assert!(!text.contains("Your Name"));
            }
            other => panic!("expected prompt, got {:?}", other),
        }

        assert_eq!(machine.state().name(), "ready");
        let draft = machine.state().draft().unwrap();
        assert_eq!(draft.name, "Pat");
        assert_eq!(draft.date, "2026-11-02");
    }

    #[test]
    fn test_submit_valid_schedules_confirmation() {
        let mut machine = ready_for("1");
        fill(&mut machine, "Pat", "34", "2026-11-02");

        assert_eq!(
            machine.decide(&BookingEvent::Submit),
            Some(BookingCommand::ScheduleConfirmation(DELAY))
        );
        assert_eq!(machine.state().name(), "submitting");
        assert!(machine.state().is_submitted());
    }

    #[test]
    fn test_delay_elapsed_navigates_once() {
        let mut machine = ready_for("1");
        fill(&mut machine, "Pat", "34", "2026-11-02");
        machine.decide(&BookingEvent::Submit);

        assert_eq!(
            machine.decide(&BookingEvent::DelayElapsed),
            Some(BookingCommand::Navigate(Destination::Confirmation))
        );
        assert_eq!(machine.state().name(), "submitted");
        assert_eq!(machine.decide(&BookingEvent::DelayElapsed), None);
        assert_eq!(machine.decide(&BookingEvent::Submit), None);
    }

    #[test]
    fn test_edits_ignored_after_submission() {
        let mut machine = ready_for("1");
        fill(&mut machine, "Pat", "34", "2026-11-02");
        machine.decide(&BookingEvent::Submit);
        machine.decide(&BookingEvent::edit(BookingField::Name, ""));
        assert_eq!(machine.state().draft().unwrap().name, "Pat");
    }

    #[test]
    fn test_delay_elapsed_before_submit_is_ignored() {
        let mut machine = ready_for("1");
        assert_eq!(machine.decide(&BookingEvent::DelayElapsed), None);
        assert_eq!(machine.state().name(), "ready");
    }

    #[test]
    fn test_display_date() {
        let mut draft = BookingDraft::default();
        draft.date = "2026-11-02".into();
        assert_eq!(draft.display_date(), "Monday, November 2, 2026");

        draft.date = "next week".into();
        assert_eq!(draft.display_date(), "next week");
    }
}
