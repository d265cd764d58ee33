use {
    crate::AppState,
    crate::domain::charge::{ChargeOutcome, DonationRequest},
    crate::domain::notification::NotificationKind,
};

/// Run one donation through the charge flow: invoke the processor, log the
/// classified outcome, fire notifications for it, and hand the outcome back
/// for HTTP rendering. The charge always completes and is classified before
/// any notification goes out.
pub async fn process_donation(state: &AppState, donation: DonationRequest) -> ChargeOutcome {
    let amount = donation.display_amount();
    let outcome = state.gateway.create_charge(&donation).await;

    match &outcome {
        ChargeOutcome::Succeeded { charge_id } => {
            tracing::info!(charge_id = %charge_id, amount = %amount, email = %donation.email, "donation charged");
        }
        ChargeOutcome::CardDeclined { status, error } => {
            tracing::info!(status = *status, detail = %error, amount = %amount, email = %donation.email, "card declined");
        }
        ChargeOutcome::ProcessorError { status, error }
        | ChargeOutcome::TransientError { status, error } => {
            tracing::error!(status = *status, detail = %error, amount = %amount, email = %donation.email, "charge failed");
        }
    }

    match outcome.notification_kind() {
        Some(NotificationKind::Success) => {
            let body = format!("{} donated ${amount}.", donation.email);
            state
                .dispatcher
                .dispatch(NotificationKind::Success, "Donation received", &body)
                .await;
        }
        Some(NotificationKind::Failure) => {
            let detail = outcome
                .error()
                .map(ToString::to_string)
                .unwrap_or_default();
            let body = format!(
                "{} tried to donate ${amount}: {detail}",
                donation.email
            );
            state
                .dispatcher
                .dispatch(NotificationKind::Failure, "Donation failed", &body)
                .await;
        }
        None => {}
    }

    outcome
}
