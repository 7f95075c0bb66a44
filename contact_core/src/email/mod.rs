//! Operator notification for accepted submissions

pub mod disabled;
pub mod resend;
pub mod template;

pub use disabled::DisabledNotifier;
pub use resend::ResendNotifier;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::{config::EmailConfig, error::Result, models::contact::ContactSubmission};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The provider accepted the email. `id` is its identifier, if it sent one.
    Sent { id: Option<String> },
    Skipped,
}

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("email provider did not respond in time")]
    Timeout,

    #[error("failed to reach email provider: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("email provider rejected the request with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("unexpected response from email provider: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for NotificationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NotificationError::Timeout
        } else {
            NotificationError::Transport(err)
        }
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_notification(
        &self,
        submission: &ContactSubmission,
    ) -> std::result::Result<Delivery, NotificationError>;
}

pub fn build_notifier(config: &EmailConfig) -> Result<Arc<dyn Notifier>> {
    if config.is_enabled() {
        Ok(Arc::new(ResendNotifier::new(config)?))
    } else {
        Ok(Arc::new(DisabledNotifier))
    }
}
