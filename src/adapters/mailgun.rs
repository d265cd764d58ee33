use {
    crate::config::EmailSettings,
    crate::domain::{
        error::ServiceError,
        notification::{Channel, NotificationEvent, NotificationSender},
    },
    std::{future::Future, pin::Pin, time::Duration},
};

const DEFAULT_BASE_URL: &str = "https://api.mailgun.net";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct MailgunSender {
    client: reqwest::Client,
    base_url: String,
    settings: EmailSettings,
}

impl MailgunSender {
    pub fn new(settings: EmailSettings) -> Self {
        Self::with_base_url(settings, DEFAULT_BASE_URL)
    }

    /// Base URL is injectable so tests can point at a local mock server.
    pub fn with_base_url(settings: EmailSettings, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            settings,
        }
    }

    async fn deliver_inner(&self, event: &NotificationEvent) -> Result<(), ServiceError> {
        let url = format!("{}/v3/{}/messages", self.base_url, self.settings.domain);
        let params = [
            ("from", self.settings.from.as_str()),
            ("to", self.settings.to.as_str()),
            ("subject", event.subject.as_str()),
            ("text", event.body.as_str()),
        ];
        let response = self
            .client
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .basic_auth("api", Some(&self.settings.api_key))
            .form(&params)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ServiceError::Delivery(format!(
                "mailgun returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}

impl NotificationSender for MailgunSender {
    fn channel(&self) -> Channel {
        Channel::Email
    }

    fn deliver(
        &self,
        event: &NotificationEvent,
    ) -> Pin<Box<dyn Future<Output = Result<(), ServiceError>> + Send + '_>> {
        let event = event.clone();
        Box::pin(async move { self.deliver_inner(&event).await })
    }
}
