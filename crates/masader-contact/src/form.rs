//! The contact form state machine.
//!
//! ```text
//! Idle --submit(valid)--> Submitting --handler ok--> Idle (success, fields cleared)
//!                                    --handler err-> Idle (error, fields kept)
//! Idle --submit(invalid)--> Idle (validation error, handler not called)
//! Submitting --submit--> Submitting (ignored)
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use masader_content::ServiceOption;
use serde::{Deserialize, Serialize};

use crate::handler::SubmissionHandler;
use crate::messages;
use crate::notifier::Notifier;

/// Raw field values as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Selected catalog key, if any
    pub service: Option<String>,
    pub message: String,
}

/// A validated contact request: every text field trimmed and non-empty,
/// and a service from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("no service selected")]
    NoService,

    #[error("service {0:?} is not in the catalog")]
    UnknownService(String),
}

impl ValidationError {
    /// Text shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingFields(_) => messages::MISSING_FIELDS,
            Self::NoService | Self::UnknownService(_) => messages::MISSING_SERVICE,
        }
    }
}

/// Result of a call to [`ContactForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Handler succeeded; fields were cleared
    Sent,
    /// Validation failed; handler not called
    Invalid(ValidationError),
    /// Handler failed; fields kept
    Failed,
    /// Another submission was already running; nothing happened
    InFlight,
}

/// One contact form and its in-flight guard.
pub struct ContactForm {
    catalog: Vec<ServiceOption>,
    fields: Mutex<FormFields>,
    submitting: AtomicBool,
    handler: Arc<dyn SubmissionHandler>,
    notifier: Arc<dyn Notifier>,
}

impl ContactForm {
    pub fn new(
        catalog: Vec<ServiceOption>,
        handler: Arc<dyn SubmissionHandler>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            catalog,
            fields: Mutex::new(FormFields::default()),
            submitting: AtomicBool::new(false),
            handler,
            notifier,
        }
    }

    pub fn state(&self) -> FormState {
        if self.submitting.load(Ordering::Acquire) {
            FormState::Submitting
        } else {
            FormState::Idle
        }
    }

    /// Snapshot of the current field values.
    pub fn fields(&self) -> FormFields {
        self.lock_fields().clone()
    }

    pub fn set_name(&self, value: impl Into<String>) {
        self.lock_fields().name = value.into();
    }

    pub fn set_phone(&self, value: impl Into<String>) {
        self.lock_fields().phone = value.into();
    }

    pub fn set_email(&self, value: impl Into<String>) {
        self.lock_fields().email = value.into();
    }

    pub fn set_message(&self, value: impl Into<String>) {
        self.lock_fields().message = value.into();
    }

    /// Select a service by catalog key. Unknown keys leave the selection unchanged.
    pub fn select_service(&self, value: &str) -> Result<(), ValidationError> {
        if !self.catalog.iter().any(|s| s.value == value) {
            return Err(ValidationError::UnknownService(value.to_string()));
        }
        self.lock_fields().service = Some(value.to_string());
        Ok(())
    }

    pub fn clear_service(&self) {
        self.lock_fields().service = None;
    }

    /// Fill every field at once. A service outside the catalog counts as unselected.
    pub fn fill(&self, fields: FormFields) {
        let service = fields
            .service
            .as_deref()
            .filter(|v| self.catalog.iter().any(|s| s.value == *v))
            .map(str::to_string);

        if service.is_none() {
            if let Some(unknown) = fields.service.as_deref().filter(|v| !v.is_empty()) {
                tracing::debug!("Ignoring unknown service {:?}", unknown);
            }
        }

        *self.lock_fields() = FormFields { service, ..fields };
    }

    /// Validate and submit the current fields.
    ///
    /// Calls the handler at most once. Returns [`SubmitOutcome::InFlight`]
    /// without side effects while another submission is running.
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(_guard) = SubmittingGuard::acquire(&self.submitting) else {
            tracing::debug!("Submission already in flight, ignoring submit");
            return SubmitOutcome::InFlight;
        };

        let payload = match validate(&self.fields()) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::debug!("Contact form rejected: {}", err);
                self.notifier.error(err.message());
                return SubmitOutcome::Invalid(err);
            }
        };

        match self.handler.submit(&payload).await {
            Ok(()) => {
                tracing::info!(
                    handler = self.handler.name(),
                    service = %payload.service,
                    "Contact request submitted"
                );
                self.notifier.success(messages::SENT);
                *self.lock_fields() = FormFields::default();
                SubmitOutcome::Sent
            }
            Err(err) => {
                tracing::warn!(handler = self.handler.name(), "Contact submission failed: {}", err);
                self.notifier.error(messages::FAILED);
                SubmitOutcome::Failed
            }
        }
    }

    fn lock_fields(&self) -> MutexGuard<'_, FormFields> {
        self.fields.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Presence check. Text fields are checked before the service.
pub fn validate(fields: &FormFields) -> Result<ContactFormData, ValidationError> {
    let name = fields.name.trim();
    let phone = fields.phone.trim();
    let email = fields.email.trim();
    let message = fields.message.trim();

    let missing: Vec<&'static str> = [
        ("name", name),
        ("phone", phone),
        ("email", email),
        ("message", message),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(field, _)| field)
    .collect();

    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let service = fields
        .service
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ValidationError::NoService)?;

    Ok(ContactFormData {
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        service: service.to_string(),
        message: message.to_string(),
    })
}

/// Holds the submitting flag for the duration of a submission.
struct SubmittingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> SubmittingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::{SimulatedHandler, SubmissionError};
    use crate::notifier::{CollectingNotifier, Notification, NotificationKind};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;
    use tokio::sync::Notify;

    /// Records payloads; optionally fails or waits for a release signal.
    #[derive(Default)]
    struct RecordingHandler {
        calls: AtomicUsize,
        payloads: Mutex<Vec<ContactFormData>>,
        fail: bool,
        gate: Option<Arc<Notify>>,
    }

    impl RecordingHandler {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn gated(gate: Arc<Notify>) -> Self {
            Self {
                gate: Some(gate),
                ..Default::default()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SubmissionHandler for RecordingHandler {
        fn name(&self) -> &'static str {
            "recording"
        }

        async fn submit(&self, data: &ContactFormData) -> Result<(), SubmissionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.payloads.lock().unwrap().push(data.clone());
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if self.fail {
                return Err(SubmissionError::Other("boom".to_string()));
            }
            Ok(())
        }
    }

    fn form_with(handler: Arc<RecordingHandler>) -> (ContactForm, Arc<CollectingNotifier>) {
        let notifier = Arc::new(CollectingNotifier::new());
        let form = ContactForm::new(ServiceOption::default_catalog(), handler, notifier.clone());
        (form, notifier)
    }

    fn fill_example(form: &ContactForm) {
        form.set_name("سعيد");
        form.set_phone("0551234567");
        form.set_email("a@b.com");
        form.select_service("driver").unwrap();
        form.set_message("استفسار");
    }

    fn example_payload() -> ContactFormData {
        ContactFormData {
            name: "سعيد".to_string(),
            phone: "0551234567".to_string(),
            email: "a@b.com".to_string(),
            service: "driver".to_string(),
            message: "استفسار".to_string(),
        }
    }

    #[tokio::test]
    async fn valid_submission_calls_handler_once_and_resets() {
        let handler = Arc::new(RecordingHandler::default());
        let (form, notifier) = form_with(handler.clone());
        fill_example(&form);

        let outcome = form.submit().await;

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(handler.calls(), 1);
        assert_eq!(*handler.payloads.lock().unwrap(), vec![example_payload()]);
        assert_eq!(form.fields(), FormFields::default());
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(
            notifier.notifications(),
            vec![Notification {
                kind: NotificationKind::Success,
                message: messages::SENT.to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn empty_message_never_reaches_handler() {
        let handler = Arc::new(RecordingHandler::default());
        let (form, notifier) = form_with(handler.clone());
        fill_example(&form);
        form.set_message("");

        let outcome = form.submit().await;

        assert_eq!(
            outcome,
            SubmitOutcome::Invalid(ValidationError::MissingFields(vec!["message"]))
        );
        assert_eq!(handler.calls(), 0);
        assert_eq!(
            notifier.notifications(),
            vec![Notification {
                kind: NotificationKind::Error,
                message: messages::MISSING_FIELDS.to_string(),
            }]
        );
        assert_eq!(form.fields().name, "سعيد");
    }

    #[tokio::test]
    async fn whitespace_only_fields_are_missing() {
        for field in ["name", "phone", "email", "message"] {
            let handler = Arc::new(RecordingHandler::default());
            let (form, notifier) = form_with(handler.clone());
            fill_example(&form);
            match field {
                "name" => form.set_name("   "),
                "phone" => form.set_phone("\t"),
                "email" => form.set_email(" \n "),
                _ => form.set_message("  "),
            }

            let outcome = form.submit().await;

            assert_eq!(
                outcome,
                SubmitOutcome::Invalid(ValidationError::MissingFields(vec![field]))
            );
            assert_eq!(handler.calls(), 0, "handler called with blank {field}");
            assert_eq!(notifier.notifications()[0].kind, NotificationKind::Error);
        }
    }

    #[tokio::test]
    async fn missing_service_is_reported_after_text_fields() {
        let handler = Arc::new(RecordingHandler::default());
        let (form, notifier) = form_with(handler.clone());
        fill_example(&form);
        form.clear_service();

        let outcome = form.submit().await;

        assert_eq!(outcome, SubmitOutcome::Invalid(ValidationError::NoService));
        assert_eq!(handler.calls(), 0);
        assert_eq!(notifier.notifications()[0].message, messages::MISSING_SERVICE);

        form.set_name("");
        assert_eq!(
            form.submit().await,
            SubmitOutcome::Invalid(ValidationError::MissingFields(vec!["name"]))
        );
    }

    #[tokio::test]
    async fn handler_failure_keeps_fields() {
        let handler = Arc::new(RecordingHandler::failing());
        let (form, notifier) = form_with(handler.clone());
        fill_example(&form);
        let before = form.fields();

        let outcome = form.submit().await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(handler.calls(), 1);
        assert_eq!(form.fields(), before);
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(
            notifier.notifications(),
            vec![Notification {
                kind: NotificationKind::Error,
                message: messages::FAILED.to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_ignored() {
        let gate = Arc::new(Notify::new());
        let handler = Arc::new(RecordingHandler::gated(gate.clone()));
        let (form, notifier) = form_with(handler.clone());
        fill_example(&form);

        let (first, second) = tokio::join!(form.submit(), async {
            tokio::task::yield_now().await;
            assert_eq!(form.state(), FormState::Submitting);
            let outcome = form.submit().await;
            gate.notify_one();
            outcome
        });

        assert_eq!(first, SubmitOutcome::Sent);
        assert_eq!(second, SubmitOutcome::InFlight);
        assert_eq!(handler.calls(), 1);
        assert_eq!(notifier.notifications().len(), 1);
        assert_eq!(form.state(), FormState::Idle);
    }

    #[tokio::test]
    async fn form_can_resubmit_after_failure() {
        let handler = Arc::new(RecordingHandler::failing());
        let (form, _notifier) = form_with(handler.clone());
        fill_example(&form);

        assert_eq!(form.submit().await, SubmitOutcome::Failed);
        assert_eq!(form.submit().await, SubmitOutcome::Failed);
        assert_eq!(handler.calls(), 2);
    }

    #[test]
    fn unknown_service_selection_is_rejected() {
        let (form, _) = form_with(Arc::new(RecordingHandler::default()));
        form.select_service("cook").unwrap();

        let result = form.select_service("gardener");

        assert_eq!(
            result,
            Err(ValidationError::UnknownService("gardener".to_string()))
        );
        assert_eq!(form.fields().service.as_deref(), Some("cook"));
    }

    #[test]
    fn fill_drops_services_outside_the_catalog() {
        let (form, _) = form_with(Arc::new(RecordingHandler::default()));

        form.fill(FormFields {
            name: "x".to_string(),
            service: Some("gardener".to_string()),
            ..Default::default()
        });

        assert_eq!(form.fields().name, "x");
        assert!(form.fields().service.is_none());
    }

    #[test]
    fn validate_trims_payload() {
        let payload = validate(&FormFields {
            name: "  سعيد ".to_string(),
            phone: " 0551234567".to_string(),
            email: "a@b.com ".to_string(),
            service: Some("driver".to_string()),
            message: "\nاستفسار\n".to_string(),
        })
        .unwrap();

        assert_eq!(payload, example_payload());
    }

    #[tokio::test]
    async fn simulated_form_succeeds_without_handler() {
        let notifier = Arc::new(CollectingNotifier::new());
        let form = ContactForm::new(
            ServiceOption::default_catalog(),
            Arc::new(SimulatedHandler::new(Duration::from_millis(5))),
            notifier.clone(),
        );
        fill_example(&form);

        assert_eq!(form.submit().await, SubmitOutcome::Sent);
        assert_eq!(notifier.notifications()[0].kind, NotificationKind::Success);
    }
}
