// Raw per-day visit/conversion records
use super::variation::VariationCatalog;
use std::collections::HashMap;

/// One calendar day of counts, keyed by variation id.
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    pub date: String,
    pub visits: HashMap<u32, u64>,
    pub conversions: HashMap<u32, u64>,
}

impl RawRecord {
    pub fn new(date: String, visits: HashMap<u32, u64>, conversions: HashMap<u32, u64>) -> Self {
        Self {
            date,
            visits,
            conversions,
        }
    }

    pub fn visits_for(&self, variation_id: u32) -> u64 {
        self.visits.get(&variation_id).copied().unwrap_or(0)
    }

    pub fn conversions_for(&self, variation_id: u32) -> u64 {
        self.conversions.get(&variation_id).copied().unwrap_or(0)
    }
}

/// The static input document: catalog plus records in chronological order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub catalog: VariationCatalog,
    pub records: Vec<RawRecord>,
}

impl Dataset {
    pub fn new(catalog: VariationCatalog, records: Vec<RawRecord>) -> Self {
        Self { catalog, records }
    }
}
