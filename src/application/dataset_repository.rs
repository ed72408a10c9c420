// Repository trait for the static input dataset
use crate::domain::record::Dataset;
use async_trait::async_trait;

#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// Load the variation catalog and the per-day records, in stored order
    async fn load_dataset(&self) -> anyhow::Result<Dataset>;
}
