//! Stable orderings shared by the allocator and the balancer.
//!
//! Every sort here is stable. Ties keep their current relative order, and
//! that order decides which group receives an item when sums are equal.

use std::cmp::Reverse;

use super::types::{Category, Group, WeightedEntry};

/// Categories with fewer entries first.
pub fn categories_by_size(categories: &[Category]) -> Vec<&Category> {
    let mut ordered: Vec<&Category> = categories.iter().collect();
    ordered.sort_by_key(|category| category.len());
    ordered
}

/// Heaviest entries first.
pub fn entries_by_weight(entries: &[WeightedEntry]) -> Vec<&WeightedEntry> {
    let mut ordered: Vec<&WeightedEntry> = entries.iter().collect();
    ordered.sort_by_key(|entry| Reverse(entry.weight));
    ordered
}

/// Lowest sum first, ties in current order.
pub fn sort_groups_by_sum(groups: &mut [Group]) {
    groups.sort_by_key(Group::sum);
}

pub fn sort_groups_by_id(groups: &mut [Group]) {
    groups.sort_by_key(Group::id);
}
