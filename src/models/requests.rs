use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::Location;

/// Request to find the best lots for a recipient
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(length(min = 1, max = 200))]
    #[serde(alias = "food_name", rename = "foodName")]
    pub food_name: String,
    #[serde(alias = "required_quantity", rename = "requiredQuantity", default)]
    pub required_quantity: u32,
    #[serde(alias = "recipient_location", rename = "recipientLocation")]
    pub recipient_location: Location,
}

/// Field an inventory listing is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Expiry,
    Quantity,
}

/// Inventory listing parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryQuery {
    #[serde(rename = "availableOnly", default)]
    pub available_only: bool,
    #[serde(rename = "donorId", default)]
    pub donor_id: Option<String>,
    #[serde(default)]
    pub sort: Option<SortKey>,
}
