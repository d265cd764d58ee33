#![allow(dead_code)]

use axum::Router;
use donation_gateway::AppState;
use donation_gateway::adapters::http::build_router;
use donation_gateway::config::ServiceConfig;
use donation_gateway::domain::charge::{ChargeOutcome, DonationRequest, ProcessorErrorBody};
use donation_gateway::domain::error::ServiceError;
use donation_gateway::domain::gateway::ChargeGateway;
use donation_gateway::domain::notification::{Channel, NotificationEvent, NotificationSender};
use donation_gateway::services::dispatcher::NotificationDispatcher;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

/// Resolve a config from literal key/value pairs — tests never touch the
/// process environment.
pub fn config_from(vars: &[(&str, &str)]) -> ServiceConfig {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServiceConfig::load(|key| map.get(key).cloned()).expect("test config should load")
}

pub fn base_config() -> ServiceConfig {
    config_from(&[("STRIPE_KEYS", "pk_test_XXX:sk_test_YYY")])
}

/// Config with every notification toggle enabled.
pub fn all_toggles_config() -> ServiceConfig {
    config_from(&[
        ("STRIPE_KEYS", "pk_test_XXX:sk_test_YYY"),
        ("EMAIL_ON_SUCCESS", "1"),
        ("EMAIL_ON_FAILURE", "1"),
        ("PUSH_ON_SUCCESS", "1"),
        ("PUSH_ON_FAILURE", "1"),
    ])
}

// ── Mock collaborators ──────────────────────────────────────────────────────

/// Gateway that answers every charge with a preset outcome.
pub struct StaticGateway {
    outcome: ChargeOutcome,
}

impl StaticGateway {
    pub fn new(outcome: ChargeOutcome) -> Self {
        Self { outcome }
    }
}

impl ChargeGateway for StaticGateway {
    fn create_charge(
        &self,
        _donation: &DonationRequest,
    ) -> Pin<Box<dyn Future<Output = ChargeOutcome> + Send + '_>> {
        let outcome = self.outcome.clone();
        Box::pin(async move { outcome })
    }
}

/// Sender that records every event it is asked to deliver, optionally
/// failing each attempt.
pub struct RecordingSender {
    channel: Channel,
    fail: bool,
    sent: Mutex<Vec<NotificationEvent>>,
}

impl RecordingSender {
    pub fn new(channel: Channel) -> Self {
        Self {
            channel,
            fail: false,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(channel: Channel) -> Self {
        Self {
            fail: true,
            ..Self::new(channel)
        }
    }

    pub fn events(&self) -> Vec<NotificationEvent> {
        self.sent.lock().unwrap().clone()
    }
}

impl NotificationSender for RecordingSender {
    fn channel(&self) -> Channel {
        self.channel
    }

    fn deliver(
        &self,
        event: &NotificationEvent,
    ) -> Pin<Box<dyn Future<Output = Result<(), ServiceError>> + Send + '_>> {
        self.sent.lock().unwrap().push(event.clone());
        let fail = self.fail;
        Box::pin(async move {
            if fail {
                Err(ServiceError::Delivery("simulated provider outage".into()))
            } else {
                Ok(())
            }
        })
    }
}

// ── App assembly ────────────────────────────────────────────────────────────

pub fn test_state(
    config: ServiceConfig,
    outcome: ChargeOutcome,
    senders: Vec<Arc<dyn NotificationSender>>,
) -> AppState {
    let dispatcher = NotificationDispatcher::with_senders(config.toggles.clone(), senders);
    AppState {
        config: Arc::new(config),
        gateway: Arc::new(StaticGateway::new(outcome)),
        dispatcher: Arc::new(dispatcher),
    }
}

pub fn test_app(
    config: ServiceConfig,
    outcome: ChargeOutcome,
    senders: Vec<Arc<dyn NotificationSender>>,
) -> Router {
    build_router(test_state(config, outcome, senders))
}

// ── Canned outcomes ─────────────────────────────────────────────────────────

pub fn succeeded() -> ChargeOutcome {
    ChargeOutcome::Succeeded {
        charge_id: "ch_test_1".into(),
    }
}

pub fn declined() -> ChargeOutcome {
    ChargeOutcome::CardDeclined {
        status: 402,
        error: ProcessorErrorBody {
            error_type: "card_error".into(),
            message: Some("Your card was declined.".into()),
            decline_code: Some("generic_decline".into()),
        },
    }
}

pub fn processor_error() -> ChargeOutcome {
    ChargeOutcome::ProcessorError {
        status: 500,
        error: ProcessorErrorBody::new("api_error", "Something went wrong on the processor's end."),
    }
}

pub fn transient_error() -> ChargeOutcome {
    ChargeOutcome::TransientError {
        status: 502,
        error: ProcessorErrorBody::connectivity("connection reset by peer"),
    }
}
