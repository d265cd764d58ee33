pub mod adapters;
pub mod config;
pub mod domain;
pub mod services;

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::domain::gateway::ChargeGateway;
use crate::services::dispatcher::NotificationDispatcher;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub gateway: Arc<dyn ChargeGateway>,
    pub dispatcher: Arc<NotificationDispatcher>,
}
