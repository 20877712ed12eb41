//! `POST /api/contact`: runs one contact form per request.

use std::sync::{Arc, PoisonError, RwLock};

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Serialize;

use masader_contact::{
    CollectingNotifier, ContactForm, FormFields, Notification, SubmissionHandler, SubmitOutcome,
};
use masader_content::ServiceOption;

/// Outcome as reported to the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Sent,
    Invalid,
    Failed,
    InFlight,
}

impl OutcomeKind {
    pub fn status(self) -> StatusCode {
        match self {
            Self::Sent => StatusCode::OK,
            Self::Invalid => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Failed => StatusCode::BAD_GATEWAY,
            Self::InFlight => StatusCode::CONFLICT,
        }
    }
}

impl From<&SubmitOutcome> for OutcomeKind {
    fn from(outcome: &SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Sent => Self::Sent,
            SubmitOutcome::Invalid(_) => Self::Invalid,
            SubmitOutcome::Failed => Self::Failed,
            SubmitOutcome::InFlight => Self::InFlight,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub outcome: OutcomeKind,
    pub notifications: Vec<Notification>,
}

/// Shared state behind the contact endpoint.
#[derive(Clone)]
pub struct ContactApi {
    catalog: Arc<RwLock<Vec<ServiceOption>>>,
    handler: Arc<dyn SubmissionHandler>,
}

impl ContactApi {
    pub fn new(catalog: Vec<ServiceOption>, handler: Arc<dyn SubmissionHandler>) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            handler,
        }
    }

    /// Replace the service catalog (after `site.toml` changes).
    pub fn set_catalog(&self, catalog: Vec<ServiceOption>) {
        *self
            .catalog
            .write()
            .unwrap_or_else(PoisonError::into_inner) = catalog;
    }

    /// Validate and submit one request.
    pub async fn submit(&self, fields: FormFields) -> ContactResponse {
        let catalog = self
            .catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let notifier = Arc::new(CollectingNotifier::new());
        let form = ContactForm::new(catalog, Arc::clone(&self.handler), notifier.clone());

        form.fill(fields);
        let outcome = form.submit().await;

        ContactResponse {
            outcome: OutcomeKind::from(&outcome),
            notifications: notifier.take(),
        }
    }
}

/// Router serving `POST /api/contact`.
pub fn contact_router(api: ContactApi) -> Router {
    Router::new()
        .route("/api/contact", post(submit_contact))
        .with_state(api)
}

async fn submit_contact(
    State(api): State<ContactApi>,
    Json(fields): Json<FormFields>,
) -> (StatusCode, Json<ContactResponse>) {
    let response = api.submit(fields).await;
    tracing::debug!("Contact request finished: {:?}", response.outcome);
    (response.outcome.status(), Json(response))
}
