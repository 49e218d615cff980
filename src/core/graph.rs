//! Food relation graph
//!
//! Undirected co-occurrence graph over food names, used to suggest
//! substitutes and companions. Edges come from the caller; the graph
//! never builds them itself.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use parking_lot::RwLock;

/// Adjacency storage the traversal runs against
///
/// Implemented by the plain [`FoodRelationGraph`] and by the lock-guarded
/// [`SharedFoodGraph`]; both share the same breadth-first search.
pub trait RelationStore {
    /// Record an undirected edge
    fn add_edge(&mut self, food_a: &str, food_b: &str);

    /// Direct neighbors of `food`, empty when unknown
    fn neighbors(&self, food: &str) -> Vec<String>;

    /// Distinct foods reachable from `food` within `depth` hops, in BFS
    /// discovery order, excluding `food` itself
    ///
    /// Each frontier entry carries its remaining hop budget. A food reached
    /// with no budget left is reported but not expanded, so `depth == 1`
    /// yields the direct neighbors and `depth == 0` yields nothing. A food
    /// can sit in the frontier more than once; only its first dequeue counts.
    ///
    /// This is one hop more generous than a rule that drops budget-0 entries
    /// without reporting them: `depth` here returns what that rule returns
    /// for `depth + 1` (`("Bread", 1)` gives `["Butter"]` here, `[]` there).
    fn find_related_food(&self, food: &str, depth: usize) -> Vec<String> {
        let mut visited: HashSet<String> = HashSet::new();
        let mut frontier: VecDeque<(String, usize)> = VecDeque::new();
        let mut result = Vec::new();

        frontier.push_back((food.to_string(), depth));

        while let Some((current, remaining)) = frontier.pop_front() {
            if !visited.insert(current.clone()) {
                continue;
            }
            if current != food {
                result.push(current.clone());
            }
            if remaining == 0 {
                continue;
            }

            let neighbors = self.neighbors(&current);
            tracing::trace!("Expanding '{}' ({} hops left, {} neighbors)", current, remaining, neighbors.len());

            for neighbor in neighbors {
                if !visited.contains(&neighbor) {
                    frontier.push_back((neighbor, remaining - 1));
                }
            }
        }

        result
    }
}

/// Adjacency-list graph keyed by food name
///
/// Edges are neither deduplicated nor guarded against self-loops: adding
/// an edge twice lists the neighbor twice.
#[derive(Debug, Clone, Default)]
pub struct FoodRelationGraph {
    adjacency: HashMap<String, Vec<String>>,
}

impl FoodRelationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrowing form of [`RelationStore::neighbors`]
    pub fn get_related_food(&self, food: &str) -> &[String] {
        self.adjacency.get(food).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, food: &str) -> bool {
        self.adjacency.contains_key(food)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }
}

impl RelationStore for FoodRelationGraph {
    fn add_edge(&mut self, food_a: &str, food_b: &str) {
        self.adjacency
            .entry(food_a.to_string())
            .or_default()
            .push(food_b.to_string());
        self.adjacency
            .entry(food_b.to_string())
            .or_default()
            .push(food_a.to_string());
    }

    fn neighbors(&self, food: &str) -> Vec<String> {
        self.get_related_food(food).to_vec()
    }
}

/// Thread-safe handle over a [`FoodRelationGraph`]
///
/// Clones share the same graph.
#[derive(Debug, Clone, Default)]
pub struct SharedFoodGraph {
    inner: Arc<RwLock<FoodRelationGraph>>,
}

impl SharedFoodGraph {
    pub fn new(graph: FoodRelationGraph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// Copy of the current graph
    pub fn snapshot(&self) -> FoodRelationGraph {
        self.inner.read().clone()
    }
}

impl RelationStore for SharedFoodGraph {
    fn add_edge(&mut self, food_a: &str, food_b: &str) {
        self.inner.write().add_edge(food_a, food_b);
    }

    fn neighbors(&self, food: &str) -> Vec<String> {
        self.inner.read().neighbors(food)
    }
}
