//! Submission handlers: where a validated contact request goes.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use masader_content::{SubmissionKind, SubmissionSettings};
use reqwest::{Client, Url};

use crate::form::ContactFormData;

/// Errors a handler can report. The form treats every variant the same way.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Endpoint rejected the request with status {0}")]
    Rejected(u16),

    #[error("Invalid webhook URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("submission.handler = \"webhook\" requires submission.webhook_url")]
    MissingWebhookUrl,

    #[error("{0}")]
    Other(String),
}

/// Receives validated contact requests.
#[async_trait]
pub trait SubmissionHandler: Send + Sync {
    /// Short identifier for logs
    fn name(&self) -> &'static str;

    async fn submit(&self, data: &ContactFormData) -> Result<(), SubmissionError>;
}

/// Local development stub: waits a fixed delay and succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedHandler {
    delay: Duration,
}

impl SimulatedHandler {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(900);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedHandler {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl SubmissionHandler for SimulatedHandler {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn submit(&self, data: &ContactFormData) -> Result<(), SubmissionError> {
        tracing::debug!(service = %data.service, "Simulating submission for {:?}", self.delay);
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// Records each request in the log and succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHandler;

#[async_trait]
impl SubmissionHandler for LogHandler {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn submit(&self, data: &ContactFormData) -> Result<(), SubmissionError> {
        tracing::info!(
            name = %data.name,
            phone = %data.phone,
            email = %data.email,
            service = %data.service,
            message = %data.message,
            "Contact request received"
        );
        Ok(())
    }
}

/// Forwards each request as a JSON POST.
#[derive(Debug, Clone)]
pub struct WebhookHandler {
    client: Client,
    url: Url,
}

impl WebhookHandler {
    pub fn new(url: &str) -> Result<Self, SubmissionError> {
        let url = Url::parse(url).map_err(|e| SubmissionError::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            client: Client::new(),
            url,
        })
    }
}

#[async_trait]
impl SubmissionHandler for WebhookHandler {
    fn name(&self) -> &'static str {
        "webhook"
    }

    async fn submit(&self, data: &ContactFormData) -> Result<(), SubmissionError> {
        let response = self
            .client
            .post(self.url.clone())
            .json(data)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Rejected(status.as_u16()));
        }

        tracing::debug!("Webhook accepted contact request with {}", status);
        Ok(())
    }
}

/// Build the handler selected by `[submission]` in `site.toml`.
pub fn handler_from_settings(
    settings: &SubmissionSettings,
) -> Result<Arc<dyn SubmissionHandler>, SubmissionError> {
    let handler: Arc<dyn SubmissionHandler> = match settings.handler {
        SubmissionKind::Simulated => Arc::new(SimulatedHandler::new(Duration::from_millis(
            settings.delay_ms,
        ))),
        SubmissionKind::Log => Arc::new(LogHandler),
        SubmissionKind::Webhook => {
            let url = settings
                .webhook_url
                .as_deref()
                .ok_or(SubmissionError::MissingWebhookUrl)?;
            Arc::new(WebhookHandler::new(url)?)
        }
    };

    tracing::info!("Contact submissions go to the {} handler", handler.name());
    Ok(handler)
}
