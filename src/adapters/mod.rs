pub mod http;
pub mod mailgun;
pub mod pushover;
pub mod stripe_gateway;
