use serde::{Deserialize, Serialize};
use std::fmt;

use crate::values::VenueKey;

/// A single bookable court inside a venue group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    /// Stable key within the venue group (e.g. "A1")
    pub key: VenueKey,
    /// Numeric id assigned by the remote service
    pub id: u32,
    /// Display name shown to the operator
    pub name: String,
    /// Maximum number of players
    pub capacity: u32,
}

impl Venue {
    pub fn new(key: impl Into<VenueKey>, id: u32, name: impl Into<String>, capacity: u32) -> Self {
        Venue {
            key: key.into(),
            id,
            name: name.into(),
            capacity,
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] id={} capacity={}",
            self.name, self.key, self.id, self.capacity
        )
    }
}
