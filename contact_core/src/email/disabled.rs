use async_trait::async_trait;

use super::{Delivery, NotificationError, Notifier};
use crate::{config::API_KEY_ENV_VAR, models::contact::ContactSubmission};

/// Used when no provider credential is configured. Submissions are only logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledNotifier;

#[async_trait]
impl Notifier for DisabledNotifier {
    async fn send_notification(
        &self,
        _submission: &ContactSubmission,
    ) -> Result<Delivery, NotificationError> {
        tracing::warn!("{} not configured - email not sent", API_KEY_ENV_VAR);
        Ok(Delivery::Skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_notifier_skips() {
        let submission = ContactSubmission::new("Jane", "jane@example.com", None, "", "Hi");
        let delivery = DisabledNotifier.send_notification(&submission).await.unwrap();
        assert_eq!(delivery, Delivery::Skipped);
    }
}
