use {
    crate::config::ServiceConfig,
    crate::domain::{
        charge::{ChargeOutcome, DonationRequest, ProcessorErrorBody},
        gateway::ChargeGateway,
        money::Currency,
    },
    std::{future::Future, pin::Pin},
    stripe::{Charge, ChargeSourceParams, CreateCharge, ErrorType, RequestError, StripeError},
};

pub struct StripeGateway {
    client: stripe::Client,
    currency: Currency,
    description: Option<String>,
}

impl StripeGateway {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            client: stripe::Client::new(config.secret_key.clone()),
            currency: config.currency.clone(),
            description: config.charge_description.clone(),
        }
    }
}

impl ChargeGateway for StripeGateway {
    fn create_charge(
        &self,
        donation: &DonationRequest,
    ) -> Pin<Box<dyn Future<Output = ChargeOutcome> + Send + '_>> {
        let donation = donation.clone();
        Box::pin(async move { self.create_charge_inner(&donation).await })
    }
}

impl StripeGateway {
    async fn create_charge_inner(&self, donation: &DonationRequest) -> ChargeOutcome {
        // The submitted fields are forwarded uninterpreted; when they cannot
        // even be encoded for the processor, answer the way the processor
        // itself would.
        let amount = match donation.amount.parse::<i64>() {
            Ok(a) => a,
            Err(_) => {
                return ChargeOutcome::ProcessorError {
                    status: 400,
                    error: ProcessorErrorBody::invalid_request(format!(
                        "invalid integer: {}",
                        donation.amount
                    )),
                };
            }
        };
        let token = match donation.token.parse::<stripe::TokenId>() {
            Ok(t) => t,
            Err(err) => {
                return ChargeOutcome::ProcessorError {
                    status: 400,
                    error: ProcessorErrorBody::invalid_request(format!("invalid token: {err}")),
                };
            }
        };

        let mut params = CreateCharge::new();
        params.amount = Some(amount);
        params.currency = Some(convert_currency(&self.currency));
        params.source = Some(ChargeSourceParams::Token(token));
        params.receipt_email = Some(donation.email.as_str());
        params.description = self.description.as_deref();

        match Charge::create(&self.client, params).await {
            Ok(charge) => ChargeOutcome::Succeeded {
                charge_id: charge.id.to_string(),
            },
            Err(err) => classify_error(err),
        }
    }
}

fn convert_currency(c: &Currency) -> stripe::Currency {
    match c {
        Currency::Usd => stripe::Currency::USD,
        Currency::Eur => stripe::Currency::EUR,
        Currency::Gbp => stripe::Currency::GBP,
        Currency::Jpy => stripe::Currency::JPY,
    }
}

fn convert_error_type(t: &ErrorType) -> &'static str {
    match t {
        ErrorType::Card => "card_error",
        ErrorType::Api => "api_error",
        ErrorType::InvalidRequest => "invalid_request_error",
        ErrorType::IdempotencyError => "idempotency_error",
        _ => "api_error",
    }
}

fn error_body(err: &RequestError) -> ProcessorErrorBody {
    ProcessorErrorBody {
        error_type: convert_error_type(&err.error_type).to_string(),
        message: err.message.clone(),
        decline_code: err.decline_code.clone(),
    }
}

/// Map the processor's failure modes onto the outcome taxonomy: card errors
/// are declines, every other processor-reported error is a processor error,
/// and anything that never produced a processor response is transient.
pub fn classify_error(err: StripeError) -> ChargeOutcome {
    match err {
        StripeError::Stripe(req) => {
            let status = req.http_status;
            let error = error_body(&req);
            if matches!(req.error_type, ErrorType::Card) {
                ChargeOutcome::CardDeclined { status, error }
            } else {
                ChargeOutcome::ProcessorError { status, error }
            }
        }
        StripeError::Timeout => ChargeOutcome::TransientError {
            status: 504,
            error: ProcessorErrorBody::connectivity("request to payment processor timed out"),
        },
        other => ChargeOutcome::TransientError {
            status: 502,
            error: ProcessorErrorBody::connectivity(other.to_string()),
        },
    }
}
