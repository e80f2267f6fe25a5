//! Contact and quote form workflow, independent of the UI layer.

mod form;
mod gateway;
mod lifecycle;
mod payload;
pub mod scroll_lock;

pub use form::{ContactField, ContactForm, FormError, FormFields, QuoteField, QuoteForm};
pub use gateway::{SubmissionFailure, SubmissionGateway};
pub use lifecycle::{
    FollowUp, FollowUpAction, FormController, PendingSubmission, SubmissionStatus,
    SubmissionTiming,
};
pub use payload::{format_quote_message, EmailParams};
