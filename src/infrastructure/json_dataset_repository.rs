// JSON file dataset repository implementation
use crate::application::dataset_repository::DatasetRepository;
use crate::domain::record::{Dataset, RawRecord};
use crate::domain::variation::{Variation, VariationCatalog};
use crate::infrastructure::error::DashboardError;
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct JsonDatasetRepository {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct DatasetDocument {
    #[serde(default)]
    variations: Vec<serde_json::Value>,
    #[serde(default)]
    data: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct VariationDocument {
    #[serde(default)]
    id: serde_json::Value,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RecordDocument {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    visits: Option<HashMap<String, serde_json::Value>>,
    #[serde(default)]
    conversions: Option<HashMap<String, serde_json::Value>>,
}

impl JsonDatasetRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetRepository for JsonDatasetRepository {
    async fn load_dataset(&self) -> Result<Dataset> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| DashboardError::DatasetRead {
                path: self.path.display().to_string(),
                source,
            })?;

        let dataset = parse_dataset(&raw)?;
        tracing::debug!(
            "Loaded {} records and {} variations from {}",
            dataset.records.len(),
            dataset.catalog.len(),
            self.path.display()
        );
        Ok(dataset)
    }
}

/// Parse a dataset document. Only invalid JSON or a wrong top-level shape
/// fails; bad entries are dropped and bad counts read as zero.
pub fn parse_dataset(raw: &str) -> Result<Dataset, DashboardError> {
    let document: DatasetDocument = serde_json::from_str(raw)?;

    let variations = document
        .variations
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            let variation = serde_json::from_value::<VariationDocument>(entry)
                .ok()
                .and_then(|v| Some(Variation::new(variation_id(&v.id)?, v.name?)));
            if variation.is_none() {
                tracing::warn!("Dropping variation entry {}: missing or invalid id/name", i);
            }
            variation
        })
        .collect();

    let records = document
        .data
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            let record = serde_json::from_value::<RecordDocument>(entry).ok().and_then(|r| {
                let date = r.date?;
                Some(RawRecord::new(
                    date,
                    counts_by_id(r.visits.unwrap_or_default()),
                    counts_by_id(r.conversions.unwrap_or_default()),
                ))
            });
            if record.is_none() {
                tracing::warn!("Dropping record {}: missing date or not an object", i);
            }
            record
        })
        .collect();

    Ok(Dataset::new(VariationCatalog::new(variations), records))
}

/// Numeric ids may arrive as numbers or numeric strings.
fn variation_id(value: &serde_json::Value) -> Option<u32> {
    match value {
        serde_json::Value::Number(n) => n.as_u64().and_then(|id| u32::try_from(id).ok()),
        serde_json::Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

fn counts_by_id(raw: HashMap<String, serde_json::Value>) -> HashMap<u32, u64> {
    raw.into_iter()
        .filter_map(|(key, value)| {
            let id = key.trim().parse::<u32>().ok()?;
            Some((id, count_value(&value)))
        })
        .collect()
}

/// Non-negative numbers only; anything else counts as zero.
fn count_value(value: &serde_json::Value) -> u64 {
    if let Some(count) = value.as_u64() {
        return count;
    }
    match value.as_f64() {
        Some(count) if count.is_finite() && count >= 0.0 => count.round() as u64,
        _ => 0,
    }
}
