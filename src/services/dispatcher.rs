use {
    crate::adapters::{mailgun::MailgunSender, pushover::PushoverSender},
    crate::config::{NotificationToggles, ServiceConfig},
    crate::domain::notification::{NotificationEvent, NotificationKind, NotificationSender},
    std::sync::Arc,
};

/// Fans a notification out to every configured channel whose toggle is
/// enabled for the event kind. Delivery is best-effort: one attempt per
/// event, failures are logged and never propagate.
pub struct NotificationDispatcher {
    toggles: NotificationToggles,
    senders: Vec<Arc<dyn NotificationSender>>,
}

impl NotificationDispatcher {
    /// A channel's sender is only constructed when its credentials are
    /// complete, so partially configured channels simply do not exist.
    pub fn from_config(config: &ServiceConfig) -> Self {
        let mut senders: Vec<Arc<dyn NotificationSender>> = Vec::new();
        if let Some(email) = &config.email {
            senders.push(Arc::new(MailgunSender::new(email.clone())));
        }
        if let Some(push) = &config.push {
            senders.push(Arc::new(PushoverSender::new(push.clone())));
        }
        Self::with_senders(config.toggles.clone(), senders)
    }

    pub fn with_senders(
        toggles: NotificationToggles,
        senders: Vec<Arc<dyn NotificationSender>>,
    ) -> Self {
        Self { toggles, senders }
    }

    pub async fn dispatch(&self, kind: NotificationKind, subject: &str, body: &str) {
        let attempts = self
            .senders
            .iter()
            .filter(|sender| self.toggles.enabled(sender.channel(), kind))
            .map(|sender| {
                let event = NotificationEvent {
                    channel: sender.channel(),
                    kind,
                    subject: subject.to_string(),
                    body: body.to_string(),
                };
                async move {
                    match sender.deliver(&event).await {
                        Ok(()) => {
                            tracing::debug!(channel = %event.channel, kind = %event.kind, "notification delivered");
                        }
                        Err(err) => {
                            tracing::warn!(channel = %event.channel, kind = %event.kind, %err, "notification delivery failed");
                        }
                    }
                }
            });
        futures::future::join_all(attempts).await;
    }
}
