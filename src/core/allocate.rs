//! Greedy initial allocation of categorized entries into K groups.

use std::num::NonZeroUsize;

use tracing::{debug, trace};

use super::ordering::{categories_by_size, entries_by_weight, sort_groups_by_sum};
use super::types::{Category, Group, Item};

/// Distribute every entry of every category into `k` groups.
///
/// Categories are processed smallest first and entries heaviest first. Before
/// each category the groups are stable-sorted by sum; the first `k` entries
/// then go round-robin across that order, so a category with at most `k`
/// entries never puts two of them in the same group. Each further entry goes
/// to the lightest group after a fresh stable sort.
///
/// The returned groups are in working order, not id order.
#[must_use]
pub fn allocate(categories: &[Category], k: NonZeroUsize) -> Vec<Group> {
    let k = k.get();
    let mut groups: Vec<Group> = (1..=k).map(Group::new).collect();

    for category in categories_by_size(categories) {
        sort_groups_by_sum(&mut groups);
        trace!(
            category = %category.name,
            entries = category.len(),
            "allocating category"
        );

        for (index, entry) in entries_by_weight(&category.items).into_iter().enumerate() {
            let slot = if index < k {
                index
            } else {
                sort_groups_by_sum(&mut groups);
                0
            };

            let group = &mut groups[slot];
            group.push(Item::tagged(entry, &category.name));
            debug!(
                item = %entry.name,
                category = %category.name,
                weight = entry.weight,
                group = group.id(),
                group_sum = group.sum(),
                "placed item"
            );
        }
    }

    groups
}
