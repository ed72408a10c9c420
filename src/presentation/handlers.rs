// HTTP request handlers
use crate::domain::theme::Theme;
use crate::domain::view::{Granularity, LineStyle, VariationFilter, ViewSelection};
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct ChartQuery {
    pub granularity: Option<Granularity>,
    pub variation: Option<String>,
    pub style: Option<LineStyle>,
}

impl ChartQuery {
    pub fn selection(&self) -> ViewSelection {
        selection_from(self.granularity, self.variation.as_deref(), self.style)
    }
}

#[derive(Debug, Deserialize)]
pub struct TooltipQuery {
    pub index: usize,
    #[serde(default)]
    pub x: f64,
    pub width: Option<f64>,
    pub granularity: Option<Granularity>,
    pub variation: Option<String>,
    pub style: Option<LineStyle>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeBody {
    pub theme: Theme,
}

fn selection_from(
    granularity: Option<Granularity>,
    variation: Option<&str>,
    style: Option<LineStyle>,
) -> ViewSelection {
    ViewSelection::new(
        granularity.unwrap_or_default(),
        VariationFilter::parse(variation),
        style.unwrap_or_default(),
    )
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Variation names in catalog order
pub async fn list_variations(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let variations = state.dashboard_service.variations();
    match json_response(&variations, accepts_brotli(&headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Chart view for the requested selection, recomputed on each request
pub async fn get_chart(
    Query(query): Query<ChartQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let selection = query.selection();
    tracing::debug!("Deriving chart for {:?}", selection);

    let view = state.dashboard_service.chart(&selection);
    match json_response(&view, accepts_brotli(&headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Tooltip content for a hovered label index
pub async fn get_tooltip(
    Query(query): Query<TooltipQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let selection = selection_from(query.granularity, query.variation.as_deref(), query.style);

    let Some(tooltip) = state
        .dashboard_service
        .tooltip(&selection, query.index, query.x, query.width)
    else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match json_response(&tooltip, accepts_brotli(&headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

pub async fn get_theme(State(state): State<Arc<AppState>>) -> Json<ThemeBody> {
    Json(ThemeBody {
        theme: state.theme_service.current().await,
    })
}

pub async fn put_theme(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ThemeBody>,
) -> impl IntoResponse {
    match state.theme_service.set(body.theme).await {
        Ok(theme) => Json(ThemeBody { theme }).into_response(),
        Err(e) => {
            tracing::error!("Error saving theme: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn toggle_theme(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.theme_service.toggle().await {
        Ok(theme) => Json(ThemeBody { theme }).into_response(),
        Err(e) => {
            tracing::error!("Error saving theme: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
