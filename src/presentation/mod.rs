// Presentation layer - HTTP boundary toward the charting surface
pub mod app_state;
pub mod handlers;
pub mod router;
