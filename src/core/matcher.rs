use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::{
    filters::{has_quantity, has_status, is_same_location, matches_name},
    ordering::merge_sort_by_expiry,
};
use crate::error::Result;
use crate::models::{FoodLot, Location, MatchRequest};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult<'a> {
    pub matches: Vec<&'a FoodLot>,
    pub total_candidates: usize,
    /// Lots that passed every filter, before truncation
    pub eligible: usize,
}

/// Best-match selector for food requests
///
/// # Pipeline Stages
/// 1. Name substring filter (case-insensitive)
/// 2. Quantity threshold
/// 3. Availability status
/// 4. Stable merge sort by expiry
/// 5. Stable same-location preference
/// 6. Truncation to the result limit
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    settings: MatchingSettings,
}

impl Matcher {
    pub fn new(settings: MatchingSettings) -> Self {
        Self { settings }
    }

    /// Validate a request, then rank `lots` against it
    pub fn find_matches<'a>(
        &self,
        lots: &'a [FoodLot],
        request: &MatchRequest,
    ) -> Result<MatchResult<'a>> {
        request.validate()?;

        Ok(self.rank(
            lots,
            &request.food_name,
            request.required_quantity,
            &request.recipient_location,
        ))
    }

    /// Run the selection pipeline
    ///
    /// Never fails: no candidates simply yields an empty result.
    pub fn rank<'a>(
        &self,
        lots: &'a [FoodLot],
        required_food_name: &str,
        required_quantity: u32,
        recipient_location: &Location,
    ) -> MatchResult<'a> {
        let query = required_food_name.to_lowercase();

        let candidates: Vec<&FoodLot> = lots
            .iter()
            // Stage 1: Name
            .filter(|lot| matches_name(lot, &query))
            // Stage 2: Quantity
            .filter(|lot| has_quantity(lot, required_quantity))
            // Stage 3: Status
            .filter(|lot| has_status(lot, &self.settings.available_status))
            .collect();

        let eligible = candidates.len();

        // Stage 4: Earliest expiry first
        let mut matches = merge_sort_by_expiry(&candidates);

        // Stage 5: `sort_by_key` is stable, so expiry order survives within each group
        matches.sort_by_key(|lot| if is_same_location(lot, recipient_location) { 0u8 } else { 1u8 });

        // Stage 6
        matches.truncate(self.settings.result_limit);

        tracing::debug!(
            "Matched '{}' (qty >= {}): {} of {} lots eligible, returning {}",
            required_food_name,
            required_quantity,
            eligible,
            lots.len(),
            matches.len()
        );

        MatchResult {
            matches,
            total_candidates: lots.len(),
            eligible,
        }
    }
}

/// Return up to five available lots for a request, earliest expiry first,
/// with lots at the recipient's location ahead of the rest
pub fn find_best_food_matches<'a>(
    available_lots: &'a [FoodLot],
    required_food_name: &str,
    required_quantity: u32,
    recipient_location: &Location,
) -> Vec<&'a FoodLot> {
    Matcher::default()
        .rank(available_lots, required_food_name, required_quantity, recipient_location)
        .matches
}
