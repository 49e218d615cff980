//! Ordering primitives over inventory lots
//!
//! Every function accepts a slice of anything that borrows as a
//! [`FoodLot`] (owned lots or references) and leaves the input untouched.

use std::borrow::Borrow;
use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::models::FoodLot;

/// Find a lot expiring exactly at `target_date`
///
/// `lots` must already be sorted by expiry ascending; this is not checked.
/// With duplicate expiries, any one matching index may be returned.
pub fn binary_search_by_expiry<L: Borrow<FoodLot>>(
    lots: &[L],
    target_date: DateTime<Utc>,
) -> Option<usize> {
    let target = target_date.timestamp_millis();
    let mut left = 0usize;
    let mut right = lots.len();

    // Half-open window [left, right)
    while left < right {
        let mid = left + (right - left) / 2;
        let mid_time = lots[mid].borrow().expiry_millis();

        if mid_time == target {
            return Some(mid);
        }
        if mid_time < target {
            left = mid + 1;
        } else {
            right = mid;
        }
    }

    None
}

/// Stable merge sort by expiry, earliest first
pub fn merge_sort_by_expiry<L: Borrow<FoodLot> + Clone>(lots: &[L]) -> Vec<L> {
    if lots.len() <= 1 {
        return lots.to_vec();
    }

    let mid = lots.len() / 2;
    let left = merge_sort_by_expiry(&lots[..mid]);
    let right = merge_sort_by_expiry(&lots[mid..]);

    merge(left, right)
}

fn merge<L: Borrow<FoodLot>>(left: Vec<L>, right: Vec<L>) -> Vec<L> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        // `<=` keeps the left half first on ties
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l.borrow().expiry_millis() <= r.borrow().expiry_millis(),
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        result.extend(next);
    }

    result.extend(left);
    result.extend(right);
    result
}

/// Quick sort by quantity, largest first
///
/// The pivot is the first element of each segment. Items with quantity `>=`
/// the pivot's go to its left and are sorted again, strictly smaller ones
/// go right. Equal quantities therefore land ahead of their pivot in
/// reverse input order, so the sort is not stable.
///
/// Segments are kept on an explicit work stack rather than the call stack.
/// Items equal to the pivot are placed directly: sorting them again with
/// the larger items could only reverse them, so one split into greater,
/// equal and smaller gives the same order without a pass per duplicate.
pub fn quick_sort_by_quantity<L: Borrow<FoodLot> + Clone>(lots: &[L]) -> Vec<L> {
    enum Step<T> {
        Sort(Vec<T>),
        Place(Vec<T>),
    }

    let mut result = Vec::with_capacity(lots.len());
    let mut pending = vec![Step::Sort(lots.to_vec())];

    while let Some(step) = pending.pop() {
        let segment = match step {
            Step::Place(items) => {
                result.extend(items);
                continue;
            }
            Step::Sort(segment) => segment,
        };

        let mut items = segment.into_iter();
        let Some(pivot) = items.next() else {
            continue;
        };
        let pivot_quantity = pivot.borrow().quantity;

        let mut greater = Vec::new();
        let mut equal = Vec::new();
        let mut smaller = Vec::new();
        for lot in items {
            match lot.borrow().quantity.cmp(&pivot_quantity) {
                Ordering::Greater => greater.push(lot),
                Ordering::Equal => equal.push(lot),
                Ordering::Less => smaller.push(lot),
            }
        }
        equal.reverse();
        equal.push(pivot);

        // Popped in reverse: greater, then equal run and pivot, then smaller
        pending.push(Step::Sort(smaller));
        pending.push(Step::Place(equal));
        pending.push(Step::Sort(greater));
    }

    result
}
