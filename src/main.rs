use {
    donation_gateway::{
        AppState, adapters::http::build_router, adapters::stripe_gateway::StripeGateway,
        config::ServiceConfig, services::dispatcher::NotificationDispatcher,
    },
    std::sync::Arc,
    tokio::signal,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();
    let config = ServiceConfig::from_env().unwrap_or_else(|err| {
        tracing::error!("configuration error: {err}");
        std::process::exit(1);
    });

    let gateway = StripeGateway::new(&config);
    let dispatcher = NotificationDispatcher::from_config(&config);

    if config.email.is_some() {
        tracing::info!("email notifications configured");
    } else {
        tracing::info!("email notifications disabled (credentials incomplete)");
    }
    if config.push.is_some() {
        tracing::info!("push notifications configured");
    } else {
        tracing::info!("push notifications disabled (credentials incomplete)");
    }

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState {
        config: Arc::new(config),
        gateway: Arc::new(gateway),
        dispatcher: Arc::new(dispatcher),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("listening on {addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to listen for SIGTERM")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("received ctrl+c, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
