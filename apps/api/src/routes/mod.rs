pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommend::handlers::handle_recommend;
use crate::sentiment::handlers::handle_analyze_text;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/recommend", post(handle_recommend))
        .route("/analyze_text", post(handle_analyze_text))
        .with_state(state)
}
