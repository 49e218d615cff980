// Model exports
pub mod domain;
pub mod requests;

pub use domain::{FoodLot, Location};
pub use requests::{InventoryQuery, MatchRequest, SortKey};
