//! Food Match - matching and recommendation engine for food redistribution
//!
//! This library ranks, sorts and matches perishable food lots against
//! recipient requests, and suggests related foods through a co-occurrence
//! graph. Every algorithm is a pure function of its inputs, apart from the
//! priority queue and graph containers that callers own.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod telemetry;

// Re-export commonly used types
pub use crate::core::{
    binary_search_by_expiry, distance_km, find_best_food_matches, list_lots, merge_sort_by_expiry,
    quick_sort_by_quantity, FoodRelationGraph, MatchResult, Matcher, PriorityQueue, RelationStore,
    SharedFoodGraph,
};
pub use config::{LoggingSettings, MatchingSettings, Settings};
pub use error::{FoodMatchError, Result};
pub use models::{FoodLot, InventoryQuery, Location, MatchRequest, SortKey};
