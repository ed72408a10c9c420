// Variation catalog domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Variation {
    pub id: u32,
    pub name: String,
}

impl Variation {
    pub fn new(id: u32, name: String) -> Self {
        Self { id, name }
    }
}

/// Ordered id -> name mapping. Iteration order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct VariationCatalog {
    entries: Vec<Variation>,
}

impl VariationCatalog {
    pub fn new(variations: Vec<Variation>) -> Self {
        let mut catalog = Self::default();
        for variation in variations {
            catalog.insert(variation);
        }
        catalog
    }

    /// Re-inserting a known id renames it in place; its position is kept.
    pub fn insert(&mut self, variation: Variation) {
        match self.entries.iter_mut().find(|v| v.id == variation.id) {
            Some(existing) => existing.name = variation.name,
            None => self.entries.push(variation),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variation> {
        self.entries.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|v| v.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
