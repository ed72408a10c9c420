// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_chart, get_theme, get_tooltip, health_check, list_variations, put_theme, toggle_theme,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/variations", get(list_variations))
        .route("/chart", get(get_chart))
        .route("/chart/tooltip", get(get_tooltip))
        .route("/theme", get(get_theme).put(put_theme))
        .route("/theme/toggle", post(toggle_theme))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
