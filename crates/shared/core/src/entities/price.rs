use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Price of one slot for a pricing bucket, in whole currency units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceInfo {
    pub day_type: String,
    pub price: i64,
    pub half_price: i64,
}

/// Prices keyed by day type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceTable {
    entries: BTreeMap<String, PriceInfo>,
}

impl PriceTable {
    pub fn new(entries: BTreeMap<String, PriceInfo>) -> Self {
        PriceTable { entries }
    }

    pub fn get(&self, day_type: &str) -> Option<&PriceInfo> {
        self.entries.get(day_type)
    }

    /// Iterate in day-type order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &PriceInfo)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
