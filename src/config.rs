//! Startup configuration. Read once from the environment, validated, then
//! immutable for the life of the process.

use {
    crate::domain::money::Currency,
    crate::domain::notification::{Channel, NotificationKind},
    std::env,
    thiserror::Error,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("STRIPE_KEYS must be \"<publishable>:<secret>\", got {0} part(s)")]
    MalformedKeyPair(usize),

    #[error("publishable key must start with pk_test_ or pk_live_, got {0:?}")]
    PublishableKeyPrefix(String),

    #[error("secret key must start with sk_test_ or sk_live_")]
    SecretKeyPrefix,

    #[error("unknown DONATION_CURRENCY: {0:?} (expected usd, eur, gbp or jpy)")]
    UnknownCurrency(String),
}

#[derive(Debug, Clone)]
pub struct EmailSettings {
    pub api_key: String,
    pub domain: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone)]
pub struct PushSettings {
    pub user_key: String,
    pub app_token: String,
    pub device: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NotificationToggles {
    pub email_on_success: bool,
    pub email_on_failure: bool,
    pub push_on_success: bool,
    pub push_on_failure: bool,
}

impl NotificationToggles {
    pub fn enabled(&self, channel: Channel, kind: NotificationKind) -> bool {
        match (channel, kind) {
            (Channel::Email, NotificationKind::Success) => self.email_on_success,
            (Channel::Email, NotificationKind::Failure) => self.email_on_failure,
            (Channel::Push, NotificationKind::Success) => self.push_on_success,
            (Channel::Push, NotificationKind::Failure) => self.push_on_failure,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub publishable_key: String,
    pub secret_key: String,
    pub charge_description: Option<String>,
    pub currency: Currency,
    pub cors_origin: String,
    pub pubkey_var: String,
    pub email: Option<EmailSettings>,
    pub push: Option<PushSettings>,
    pub toggles: NotificationToggles,
    pub host: String,
    pub port: u16,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(|key| env::var(key).ok())
    }

    /// Resolve a config from a key lookup. Taking a closure instead of
    /// reading `env::var` directly keeps tests off the process environment.
    pub fn load(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_keys = get("STRIPE_KEYS")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("STRIPE_KEYS"))?;
        let parts: Vec<&str> = raw_keys.split(':').collect();
        let &[publishable_key, secret_key] = &parts[..] else {
            return Err(ConfigError::MalformedKeyPair(parts.len()));
        };
        if !(publishable_key.starts_with("pk_test_") || publishable_key.starts_with("pk_live_")) {
            return Err(ConfigError::PublishableKeyPrefix(publishable_key.into()));
        }
        if !(secret_key.starts_with("sk_test_") || secret_key.starts_with("sk_live_")) {
            return Err(ConfigError::SecretKeyPrefix);
        }

        let currency = match get("DONATION_CURRENCY").filter(|v| !v.is_empty()) {
            Some(v) => {
                Currency::try_from(v.as_str()).map_err(|_| ConfigError::UnknownCurrency(v))?
            }
            None => Currency::Usd,
        };

        let email = match (
            get("MAILGUN_API_KEY").filter(|v| !v.is_empty()),
            get("MAILGUN_DOMAIN").filter(|v| !v.is_empty()),
            get("MAILGUN_FROM").filter(|v| !v.is_empty()),
            get("MAILGUN_TO").filter(|v| !v.is_empty()),
        ) {
            (Some(api_key), Some(domain), Some(from), Some(to)) => Some(EmailSettings {
                api_key,
                domain,
                from,
                to,
            }),
            _ => None,
        };

        let push = match (
            get("PUSHOVER_USER_KEY").filter(|v| !v.is_empty()),
            get("PUSHOVER_APP_TOKEN").filter(|v| !v.is_empty()),
        ) {
            (Some(user_key), Some(app_token)) => Some(PushSettings {
                user_key,
                app_token,
                device: get("PUSHOVER_DEVICE").filter(|v| !v.is_empty()),
            }),
            _ => None,
        };

        // On-success notifications are opt-in; on-failure are opt-out.
        let toggles = NotificationToggles {
            email_on_success: flag(&get, "EMAIL_ON_SUCCESS", false),
            email_on_failure: flag(&get, "EMAIL_ON_FAILURE", true),
            push_on_success: flag(&get, "PUSH_ON_SUCCESS", false),
            push_on_failure: flag(&get, "PUSH_ON_FAILURE", true),
        };

        let port = get("PORT").and_then(|p| p.parse().ok()).unwrap_or(3000);

        Ok(Self {
            publishable_key: publishable_key.to_string(),
            secret_key: secret_key.to_string(),
            charge_description: get("CHARGE_DESCRIPTION").filter(|v| !v.is_empty()),
            currency,
            cors_origin: get("CORS_ORIGIN")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "*".to_string()),
            pubkey_var: get("PUBKEY_VAR")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "stripe_pubkey".to_string()),
            email,
            push,
            toggles,
            host: get("HOST")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
        })
    }
}

fn flag(get: impl Fn(&str) -> Option<String>, key: &str, default: bool) -> bool {
    get(key)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}
