// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::theme_service::ThemeService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub theme_service: Arc<ThemeService>,
}
