// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod graph;
pub mod inventory;
pub mod matcher;
pub mod ordering;
pub mod priority_queue;

pub use distance::distance_km;
pub use graph::{FoodRelationGraph, RelationStore, SharedFoodGraph};
pub use inventory::list_lots;
pub use matcher::{find_best_food_matches, MatchResult, Matcher};
pub use ordering::{binary_search_by_expiry, merge_sort_by_expiry, quick_sort_by_quantity};
pub use priority_queue::PriorityQueue;
