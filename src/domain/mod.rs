// Domain layer - Pure data model, no I/O
pub mod chart;
pub mod record;
pub mod series;
pub mod theme;
pub mod tooltip;
pub mod variation;
pub mod view;
