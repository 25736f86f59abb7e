//! Contact dialog lifecycle.
//!
//! The dialog itself runs in the browser, but its lifecycle is a small state
//! machine worth pinning down: Closed, Editing, Submitting, Submitted, with
//! one in-flight delivery at most and a fixed success-display delay before
//! the automatic close. The shipped script in `static/js/portfolio.js`
//! follows these transitions.

use crate::models::Inquiry;

/// How long the success state stays visible before the dialog closes, in
/// milliseconds.
pub const SUBMITTED_DISPLAY_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    Editing,
    Submitting,
    Submitted,
}

/// Events the host feeds into the dialog.
#[derive(Debug)]
pub enum DialogEvent {
    /// User opened the dialog.
    Open,
    /// User dismissed the dialog (close button or backdrop).
    Dismiss,
    /// User submitted the form with the given draft.
    Submit(Inquiry),
    /// The relay reported success.
    DeliverySucceeded,
    /// The relay reported failure.
    DeliveryFailed,
    /// The success-display delay elapsed.
    DisplayElapsed,
}

/// What the host must do after a transition.
#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    /// POST the inquiry to the contact route and report the outcome back as
    /// `DeliverySucceeded` or `DeliveryFailed`.
    BeginDelivery(Inquiry),
    /// Show the blocking failure alert; entered values stay in place.
    ShowFailureAlert,
    /// Fire `DisplayElapsed` after `SUBMITTED_DISPLAY_MS`.
    ScheduleClose,
    /// Reset every form field to empty.
    ClearForm,
}

#[derive(Debug)]
pub struct ContactDialog {
    state: DialogState,
}

impl ContactDialog {
    pub fn new() -> Self {
        Self {
            state: DialogState::Closed,
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    /// Apply one event and return the effect the host must perform.
    ///
    /// Events that do not apply in the current state are ignored. In
    /// particular, a delivery outcome arriving after dismissal lands in
    /// Closed and changes nothing: dismissal never cancels the in-flight
    /// request, its result is simply not observed.
    pub fn apply(&mut self, event: DialogEvent) -> Effect {
        use DialogState::*;

        match (self.state, event) {
            (Closed, DialogEvent::Open) => {
                self.state = Editing;
                Effect::None
            }
            (Editing, DialogEvent::Submit(inquiry)) => {
                // An incomplete submit stays in Editing; the form keeps
                // whatever was entered.
                if inquiry.is_complete() {
                    self.state = Submitting;
                    Effect::BeginDelivery(inquiry)
                } else {
                    Effect::None
                }
            }
            (Submitting, DialogEvent::DeliverySucceeded) => {
                self.state = Submitted;
                Effect::ScheduleClose
            }
            (Submitting, DialogEvent::DeliveryFailed) => {
                self.state = Editing;
                Effect::ShowFailureAlert
            }
            (Submitted, DialogEvent::DisplayElapsed) => {
                self.state = Closed;
                Effect::ClearForm
            }
            (Editing | Submitting, DialogEvent::Dismiss) => {
                self.state = Closed;
                Effect::None
            }
            (Submitted, DialogEvent::Dismiss) => {
                self.state = Closed;
                Effect::ClearForm
            }
            _ => Effect::None,
        }
    }
}

impl Default for ContactDialog {
    fn default() -> Self {
        Self::new()
    }
}
