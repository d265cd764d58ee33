use {
    crate::config::PushSettings,
    crate::domain::{
        error::ServiceError,
        notification::{Channel, NotificationEvent, NotificationSender},
    },
    std::{future::Future, pin::Pin, time::Duration},
};

const DEFAULT_BASE_URL: &str = "https://api.pushover.net";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct PushoverSender {
    client: reqwest::Client,
    base_url: String,
    settings: PushSettings,
}

impl PushoverSender {
    pub fn new(settings: PushSettings) -> Self {
        Self::with_base_url(settings, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(settings: PushSettings, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            settings,
        }
    }

    async fn deliver_inner(&self, event: &NotificationEvent) -> Result<(), ServiceError> {
        let url = format!("{}/1/messages.json", self.base_url);
        let mut params = vec![
            ("token", self.settings.app_token.as_str()),
            ("user", self.settings.user_key.as_str()),
            ("title", event.subject.as_str()),
            ("message", event.body.as_str()),
        ];
        if let Some(device) = &self.settings.device {
            params.push(("device", device.as_str()));
        }
        let response = self
            .client
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .form(&params)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ServiceError::Delivery(format!(
                "pushover returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}

impl NotificationSender for PushoverSender {
    fn channel(&self) -> Channel {
        Channel::Push
    }

    fn deliver(
        &self,
        event: &NotificationEvent,
    ) -> Pin<Box<dyn Future<Output = Result<(), ServiceError>> + Send + '_>> {
        let event = event.clone();
        Box::pin(async move { self.deliver_inner(&event).await })
    }
}
