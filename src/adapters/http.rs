use {
    crate::{
        AppState,
        domain::charge::{ChargeOutcome, DonationRequest},
        services::donation,
    },
    axum::{
        Form, Json, Router,
        extract::State,
        http::{HeaderValue, StatusCode, header},
        response::{IntoResponse, Response},
        routing::{get, post},
    },
    std::time::Duration,
    tower_http::{
        cors::{Any, CorsLayer},
        timeout::TimeoutLayer,
    },
};

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origin);
    Router::new()
        .route("/pubkey.js", get(pubkey_handler))
        .route("/ping", get(ping_handler))
        .route("/charge", post(charge_handler))
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .with_state(state)
}

fn cors_layer(origin: &str) -> CorsLayer {
    if origin == "*" {
        CorsLayer::new().allow_origin(Any)
    } else {
        // Validated at startup, before the listener binds.
        let origin = origin
            .parse::<HeaderValue>()
            .expect("CORS_ORIGIN is not a valid header value");
        CorsLayer::new().allow_origin(origin)
    }
}

/// Small script exposing the publishable key to checkout pages.
pub async fn pubkey_handler(State(state): State<AppState>) -> impl IntoResponse {
    let body = format!(
        "var {} = \"{}\";",
        state.config.pubkey_var, state.config.publishable_key
    );
    ([(header::CONTENT_TYPE, "text/javascript")], body)
}

pub async fn ping_handler() -> StatusCode {
    tracing::info!("ping");
    StatusCode::OK
}

pub async fn charge_handler(
    State(state): State<AppState>,
    Form(donation): Form<DonationRequest>,
) -> Response {
    match donation::process_donation(&state, donation).await {
        ChargeOutcome::Succeeded { .. } => StatusCode::OK.into_response(),
        ChargeOutcome::CardDeclined { status, error }
        | ChargeOutcome::ProcessorError { status, error }
        | ChargeOutcome::TransientError { status, error } => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(serde_json::json!({ "error": error }))).into_response()
        }
    }
}
