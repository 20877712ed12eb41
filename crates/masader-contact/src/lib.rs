//! Contact form submission flow.
//!
//! A [`ContactForm`] holds the field values for one form, validates them on
//! submit, hands the payload to an injected [`SubmissionHandler`] and reports
//! the outcome through an injected [`Notifier`]. While a submission is in
//! flight further submits are ignored.

pub mod form;
pub mod handler;
pub mod messages;
pub mod notifier;

pub use form::{
    ContactForm, ContactFormData, FormFields, FormState, SubmitOutcome, ValidationError,
};
pub use handler::{
    handler_from_settings, LogHandler, SimulatedHandler, SubmissionError, SubmissionHandler,
    WebhookHandler,
};
pub use notifier::{CollectingNotifier, Notification, NotificationKind, Notifier};
