use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Symbolic location of a lot or recipient
///
/// Equality is exact and case-sensitive on both fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
}

impl Location {
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
        }
    }
}

/// One inventory unit of a perishable food item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLot {
    pub id: String,
    pub name: String,
    #[serde(rename = "expiryDate")]
    pub expiry_date: DateTime<Utc>,
    pub quantity: u32,
    pub status: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(rename = "donorId", default)]
    pub donor_id: Option<String>,
}

impl FoodLot {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        expiry_date: DateTime<Utc>,
        quantity: u32,
        status: impl Into<String>,
        location: Option<Location>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            expiry_date,
            quantity,
            status: status.into(),
            location,
            manufacturer: None,
            donor_id: None,
        }
    }

    /// Expiry as a millisecond timestamp, the unit all orderings compare on
    #[inline]
    pub fn expiry_millis(&self) -> i64 {
        self.expiry_date.timestamp_millis()
    }
}
