use std::time::Duration;

use chrono::NaiveDateTime;

use super::form::{FormError, FormFields};
use super::gateway::SubmissionFailure;
use super::payload::EmailParams;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTiming {
    /// How long a success or error banner stays up before returning to idle.
    pub status_display: Duration,
    /// Delay before the enclosing overlay closes after a success, if there is one.
    pub close_after_success: Option<Duration>,
}

impl SubmissionTiming {
    pub const CONTACT: Self = Self {
        status_display: Duration::from_secs(5),
        close_after_success: None,
    };

    pub const QUOTE: Self = Self {
        status_display: Duration::from_secs(5),
        close_after_success: Some(Duration::from_secs(2)),
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUpAction {
    ResetStatus,
    CloseOverlay,
}

/// A delayed action scheduled by a settled attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowUp {
    pub attempt: u64,
    pub delay: Duration,
    pub action: FollowUpAction,
}

/// Handed out by [`FormController::begin_submit`]; the payload is frozen at this point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub attempt: u64,
    pub params: EmailParams,
}

/// Form state plus the submission state machine for one form instance.
#[derive(Debug, Clone)]
pub struct FormController<F> {
    form: F,
    status: SubmissionStatus,
    attempt: u64,
    timing: SubmissionTiming,
}

impl<F: FormFields> FormController<F> {
    pub fn new(timing: SubmissionTiming) -> Self {
        Self {
            form: F::default(),
            status: SubmissionStatus::Idle,
            attempt: 0,
            timing,
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn set_field(&mut self, name: &str, value: String) -> Result<(), FormError> {
        if self.status.is_submitting() {
            return Ok(());
        }
        self.form.set_field(name, value)
    }

    pub fn toggle_list_field(
        &mut self,
        name: &str,
        value: &str,
        included: bool,
    ) -> Result<(), FormError> {
        if self.status.is_submitting() {
            return Ok(());
        }
        self.form.toggle_list_field(name, value, included)
    }

    /// Starts a new attempt unless one is already in flight.
    pub fn begin_submit(&mut self, now: NaiveDateTime) -> Option<PendingSubmission> {
        if self.status.is_submitting() {
            return None;
        }
        self.attempt += 1;
        self.status = SubmissionStatus::Submitting;
        Some(PendingSubmission {
            attempt: self.attempt,
            params: self.form.to_params(now),
        })
    }

    /// Settles the in-flight attempt and returns the follow-ups to schedule.
    pub fn finish(
        &mut self,
        attempt: u64,
        outcome: Result<(), SubmissionFailure>,
    ) -> Vec<FollowUp> {
        if attempt != self.attempt || !self.status.is_submitting() {
            return Vec::new();
        }
        let timing = self.timing;
        let mut follow_ups = Vec::new();
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.form.clear();
                if let Some(delay) = timing.close_after_success {
                    follow_ups.push(FollowUp {
                        attempt,
                        delay,
                        action: FollowUpAction::CloseOverlay,
                    });
                }
            }
            Err(err) => {
                log::error!("Email send error: {err}");
                self.status = SubmissionStatus::Error;
            }
        }
        follow_ups.push(FollowUp {
            attempt,
            delay: timing.status_display,
            action: FollowUpAction::ResetStatus,
        });
        follow_ups
    }

    /// Applies a follow-up, returning its action if it still belongs to the latest attempt.
    pub fn apply(&mut self, follow_up: FollowUp) -> Option<FollowUpAction> {
        if follow_up.attempt != self.attempt || self.status.is_submitting() {
            return None;
        }
        if follow_up.action == FollowUpAction::ResetStatus {
            self.status = SubmissionStatus::Idle;
        }
        Some(follow_up.action)
    }
}
