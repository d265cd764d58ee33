use {
    super::error::ServiceError,
    derive_more::Display,
    std::{future::Future, pin::Pin},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Channel {
    #[display("email")]
    Email,
    #[display("push")]
    Push,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum NotificationKind {
    #[display("success")]
    Success,
    #[display("failure")]
    Failure,
}

/// Ephemeral message handed to a sender and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    pub channel: Channel,
    pub kind: NotificationKind,
    pub subject: String,
    pub body: String,
}

pub trait NotificationSender: Send + Sync {
    fn channel(&self) -> Channel;

    fn deliver(
        &self,
        event: &NotificationEvent,
    ) -> Pin<Box<dyn Future<Output = Result<(), ServiceError>> + Send + '_>>;
}
