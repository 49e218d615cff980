use crate::config::MatchingSettings;
use crate::core::{
    filters::{has_status, is_from_donor},
    ordering::{merge_sort_by_expiry, quick_sort_by_quantity},
};
use crate::models::{FoodLot, InventoryQuery, SortKey};

/// List inventory for a dashboard view
///
/// A donor filter replaces the availability filter rather than combining
/// with it, so a donor sees every one of their lots. Availability uses the
/// same status tag as the matcher.
pub fn list_lots<'a>(
    lots: &'a [FoodLot],
    query: &InventoryQuery,
    settings: &MatchingSettings,
) -> Vec<&'a FoodLot> {
    let selected: Vec<&FoodLot> = match (&query.donor_id, query.available_only) {
        (Some(donor_id), _) => lots.iter().filter(|lot| is_from_donor(lot, donor_id)).collect(),
        (None, true) => lots
            .iter()
            .filter(|lot| has_status(lot, &settings.available_status))
            .collect(),
        (None, false) => lots.iter().collect(),
    };

    let listed = match query.sort {
        Some(SortKey::Expiry) => merge_sort_by_expiry(&selected),
        Some(SortKey::Quantity) => quick_sort_by_quantity(&selected),
        None => selected,
    };

    tracing::debug!("Listed {} of {} lots ({:?})", listed.len(), lots.len(), query);

    listed
}
