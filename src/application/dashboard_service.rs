// Dashboard service - Use case for serving chart views
use crate::application::dataset_repository::DatasetRepository;
use crate::application::series_builder::build_series;
use crate::application::view_pipeline::derive_view;
use crate::domain::chart::ChartView;
use crate::domain::record::Dataset;
use crate::domain::series::SeriesSet;
use crate::domain::tooltip::Tooltip;
use crate::domain::variation::VariationCatalog;
use crate::domain::view::ViewSelection;
use crate::infrastructure::config::ChartConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    catalog: Arc<VariationCatalog>,
    base: Arc<SeriesSet>,
    chart_config: ChartConfig,
}

impl DashboardService {
    /// Load the dataset once and build the base series from it
    pub async fn load(
        repository: Arc<dyn DatasetRepository>,
        chart_config: ChartConfig,
    ) -> anyhow::Result<Self> {
        let dataset = repository.load_dataset().await?;
        Ok(Self::from_dataset(dataset, chart_config))
    }

    pub fn from_dataset(dataset: Dataset, chart_config: ChartConfig) -> Self {
        if dataset.catalog.is_empty() {
            tracing::warn!("Dataset has no variations; every chart will be empty");
        }
        let base = build_series(&dataset.records, &dataset.catalog, &chart_config.label_format);

        tracing::info!(
            "Built {} series over {} days",
            base.series.len(),
            base.labels.len()
        );

        Self {
            catalog: Arc::new(dataset.catalog),
            base: Arc::new(base),
            chart_config,
        }
    }

    pub fn variations(&self) -> Vec<String> {
        self.catalog.names()
    }

    /// Recomputed from the base on every call
    pub fn chart(&self, selection: &ViewSelection) -> ChartView {
        derive_view(&self.base, selection, &self.chart_config)
    }

    pub fn tooltip(
        &self,
        selection: &ViewSelection,
        index: usize,
        caret_x: f64,
        chart_width: Option<f64>,
    ) -> Option<Tooltip> {
        let view = self.chart(selection);
        Tooltip::at(&view, index, caret_x, chart_width)
    }
}
