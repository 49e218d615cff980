use crate::models::{FoodLot, Location};

/// Case-insensitive substring match on the lot name
///
/// `query` must already be lowercased.
#[inline]
pub fn matches_name(lot: &FoodLot, query: &str) -> bool {
    lot.name.to_lowercase().contains(query)
}

#[inline]
pub fn has_quantity(lot: &FoodLot, required_quantity: u32) -> bool {
    lot.quantity >= required_quantity
}

/// Check the lot's status tag against the eligible tag, ignoring case
#[inline]
pub fn has_status(lot: &FoodLot, status: &str) -> bool {
    lot.status.to_lowercase() == status.to_lowercase()
}

/// Exact, case-sensitive match of city and state
///
/// Lots without a location never match.
#[inline]
pub fn is_same_location(lot: &FoodLot, recipient: &Location) -> bool {
    lot.location
        .as_ref()
        .is_some_and(|location| location.city == recipient.city && location.state == recipient.state)
}

#[inline]
pub fn is_from_donor(lot: &FoodLot, donor_id: &str) -> bool {
    lot.donor_id.as_deref() == Some(donor_id)
}
