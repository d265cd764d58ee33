pub mod charge;
pub mod error;
pub mod gateway;
pub mod money;
pub mod notification;
