use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;

use caseflow_api::app::build_router;
use caseflow_api::config::AppConfig;
use caseflow_api::services::case_store::LogCaseStore;
use caseflow_api::services::stripe_service::StripeService;
use caseflow_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        "✅ Config loaded ({} mode)",
        if config.is_live() { "live" } else { "test" }
    );
    tracing::debug!("Config: {}", config.get_config_info());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("HOST/PORT must form a valid socket address");

    let stripe = Arc::new(StripeService::new(&config));
    let state = AppState::new(config, stripe, Arc::new(LogCaseStore));

    let app = build_router(state);
    start_server(app, addr).await;
}

async fn start_server(app: Router, addr: SocketAddr) {
    tracing::info!("🚀 Server starting on {}", addr);

    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            axum::serve(listener, app).await.unwrap();
        }
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    }
}
