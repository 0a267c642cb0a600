use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/count", post(handlers::count_form))
        .route("/select/:category", post(handlers::select_form))
        .route("/language/:code", post(handlers::language_form))
        .route("/reset", post(handlers::reset_form))
        .route("/clear", post(handlers::clear_form))
        .route("/api/state", get(handlers::get_state))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/increment", post(handlers::increment))
        .route("/api/select", post(handlers::select))
        .route("/api/reset", post(handlers::reset))
        .route("/api/clear", post(handlers::clear))
        .route("/api/language", post(handlers::language))
        .with_state(state)
}
