use {
    super::charge::{ChargeOutcome, DonationRequest},
    std::{future::Future, pin::Pin},
};

/// The payment-processor boundary. Infallible by signature: every failure
/// mode is classified into a `ChargeOutcome` variant.
pub trait ChargeGateway: Send + Sync {
    fn create_charge(
        &self,
        donation: &DonationRequest,
    ) -> Pin<Box<dyn Future<Output = ChargeOutcome> + Send + '_>>;
}
