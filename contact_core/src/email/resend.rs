//! Resend (https://resend.com) email API client

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{template, Delivery, NotificationError, Notifier};
use crate::{
    config::EmailConfig,
    error::{AppError, Result},
    models::contact::ContactSubmission,
};

#[derive(Clone)]
pub struct ResendNotifier {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    from: String,
    to: String,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    reply_to: &'a str,
    subject: String,
    html: String,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    #[serde(default)]
    id: Option<String>,
}

impl ResendNotifier {
    pub fn new(config: &EmailConfig) -> Result<Self> {
        let api_key = config
            .api_key()
            .ok_or_else(|| AppError::Other(anyhow::anyhow!("Resend API key is not configured")))?
            .to_string();

        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Other(anyhow::anyhow!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: emails_endpoint(&config.api_url),
            api_key,
            from: config.from.clone(),
            to: config.to.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn emails_endpoint(api_url: &str) -> String {
    format!("{}/emails", api_url.trim_end_matches('/'))
}

#[async_trait]
impl Notifier for ResendNotifier {
    async fn send_notification(
        &self,
        submission: &ContactSubmission,
    ) -> std::result::Result<Delivery, NotificationError> {
        let request = SendEmailRequest {
            from: &self.from,
            to: &self.to,
            reply_to: &submission.email,
            subject: template::subject(submission),
            html: template::render_html(submission, chrono::Utc::now()),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(NotificationError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SendEmailResponse = serde_json::from_str(&body)
            .map_err(|e| NotificationError::InvalidResponse(e.to_string()))?;

        Ok(Delivery::Sent { id: parsed.id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_base_url() {
        assert_eq!(emails_endpoint("https://api.resend.com"), "https://api.resend.com/emails");
        assert_eq!(emails_endpoint("http://127.0.0.1:9000/"), "http://127.0.0.1:9000/emails");
    }

    #[test]
    fn test_requires_api_key() {
        let config = EmailConfig::default();
        assert!(ResendNotifier::new(&config).is_err());

        let mut config = EmailConfig::default();
        config.api_key = Some("re_test".to_string());
        let notifier = ResendNotifier::new(&config).unwrap();
        assert_eq!(notifier.endpoint(), "https://api.resend.com/emails");
    }
}
