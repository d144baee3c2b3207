use std::env;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use state::AppState;

/// Generous cap for gesture frame batches (four sub-tests upload a dozen or
/// more camera frames each).
const MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bucket = env::var("MOTORIA_BUCKET").unwrap_or_else(|_| "motoria".to_string());
    let addr = env::var("MOTORIA_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let jwt_secret =
        env::var("MOTORIA_JWT_SECRET").unwrap_or_else(|_| "development-only-secret".to_string());
    let token_ttl_minutes = env::var("MOTORIA_TOKEN_TTL_MINUTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(60);
    let classifier_model_id = env::var("MOTORIA_CLASSIFIER_MODEL_ID")
        .unwrap_or_else(|_| "us.anthropic.claude-sonnet-4-6".to_string());

    let sdk_config = motoria_storage::client::load_config().await;
    let s3 = motoria_storage::client::build_client(&sdk_config);

    let state = AppState {
        s3,
        bucket,
        sdk_config,
        classifier_model_id,
        jwt_secret,
        token_ttl_minutes,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Doctor-facing routes sit behind the bearer-token middleware.
    let protected = Router::new()
        .route("/doctor/sessions", post(routes::sessions::create_session))
        .route("/doctor/sessions", get(routes::sessions::list_sessions))
        .route(
            "/doctor/sessions/{id}",
            get(routes::sessions::get_session_for_doctor),
        )
        .route("/sessions/{id}/diagnosis", post(routes::diagnosis::set_diagnosis))
        .route("/sessions/{id}/degree", post(routes::diagnosis::set_degree))
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    let app = Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        // Account management (no auth)
        .route("/register", post(routes::users::register))
        .route("/login", post(routes::users::login))
        // Patient-facing test flow (keyed by session id, no auth)
        .route("/test", get(routes::questionnaire::get_questionnaire))
        .route("/sessions/{id}", get(routes::sessions::get_session))
        .route("/sessions/{id}/gestures", post(routes::gestures::score_subtest))
        .route("/sessions/{id}/answers", post(routes::answers::submit_answers))
        .merge(protected)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "motoria api listening");
    axum::serve(listener, app).await?;

    Ok(())
}
