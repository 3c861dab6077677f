//! Pairwise same-category swap balancing.
//!
//! A cursor walks the groups in ascending id order. For the cursor group the
//! balancer looks for the first same-category pair `(item, target)` with the
//! target in a higher-id group whose exchange strictly shrinks the gap between
//! the two group sums. It performs that swap and rescans the cursor group from
//! its first item; once a full scan finds nothing, the cursor advances. The
//! pass ends when the cursor reaches the last group.
//!
//! A swap between two later groups can reopen a gap the cursor already left
//! behind. [`BalanceMode::UntilStable`] repeats the pass until one of them
//! performs no swap, which reaches a local fixed point over every pair of
//! groups. Each accepted swap moves weight `δ` from the heavier group to the
//! lighter one with `0 < δ < gap`, so the sum of squared group sums strictly
//! drops and the repetition terminates.

use serde::Serialize;
use tracing::{debug, info};

use super::ordering::sort_groups_by_id;
use super::types::{Group, exchange};

/// One exchange performed by the balancer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapRecord {
    pub category: String,
    pub group: usize,
    pub item: String,
    pub target_group: usize,
    pub target_item: String,
    pub gap_before: u64,
    pub gap_after: u64,
}

/// How many cursor passes the balancer runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceMode {
    /// One pass; stop once the cursor reaches the last group.
    #[default]
    SinglePass,
    /// Repeat passes until one performs no swap.
    UntilStable,
}

/// Outcome of a balancing run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BalanceReport {
    pub swaps: Vec<SwapRecord>,
    /// Cursor passes run. In [`BalanceMode::UntilStable`] the final swap-free
    /// pass is included.
    pub sweeps: usize,
}

impl BalanceReport {
    #[must_use]
    pub fn swap_count(&self) -> usize {
        self.swaps.len()
    }
}

#[derive(Debug, Clone, Copy)]
struct SwapCandidate {
    slot: usize,
    target: usize,
    target_slot: usize,
    gap_before: u64,
    gap_after: u64,
}

/// Balance `groups` in place with a single cursor pass.
///
/// The groups are sorted by id first; the cursor and "higher group" both refer
/// to that order.
pub fn balance(groups: &mut [Group]) -> BalanceReport {
    balance_with(groups, BalanceMode::SinglePass)
}

/// Balance `groups` in place using `mode`.
pub fn balance_with(groups: &mut [Group], mode: BalanceMode) -> BalanceReport {
    sort_groups_by_id(groups);

    let mut report = BalanceReport::default();
    loop {
        let before = report.swap_count();
        sweep(groups, &mut report);
        report.sweeps += 1;
        debug!(
            sweep = report.sweeps,
            swaps = report.swap_count() - before,
            "sweep finished"
        );
        if mode == BalanceMode::SinglePass || report.swap_count() == before {
            break;
        }
    }

    info!(
        swaps = report.swap_count(),
        sweeps = report.sweeps,
        ?mode,
        "balancing finished"
    );
    report
}

/// One cursor pass over all groups, recording each swap in `report`.
fn sweep(groups: &mut [Group], report: &mut BalanceReport) {
    let mut cursor = 0;

    while cursor < groups.len() {
        let Some(candidate) = find_swap(groups, cursor) else {
            cursor += 1;
            continue;
        };

        let (head, tail) = groups.split_at_mut(candidate.target);
        let group = &mut head[cursor];
        let target = &mut tail[0];

        let record = SwapRecord {
            category: group.items()[candidate.slot].category().to_string(),
            group: group.id(),
            item: group.items()[candidate.slot].name().to_string(),
            target_group: target.id(),
            target_item: target.items()[candidate.target_slot].name().to_string(),
            gap_before: candidate.gap_before,
            gap_after: candidate.gap_after,
        };

        exchange(group, candidate.slot, target, candidate.target_slot);

        debug!(
            category = %record.category,
            group = record.group,
            item = %record.item,
            target_group = record.target_group,
            target_item = %record.target_item,
            gap_before = record.gap_before,
            gap_after = record.gap_after,
            "swapped items"
        );
        report.swaps.push(record);
    }
}

/// First qualifying swap for the group at `cursor`, in scan order: cursor item
/// index, then target group, then target item index.
fn find_swap(groups: &[Group], cursor: usize) -> Option<SwapCandidate> {
    let group = &groups[cursor];

    for (slot, item) in group.items().iter().enumerate() {
        for (target, target_group) in groups.iter().enumerate().skip(cursor + 1) {
            let gap_before = group.sum().abs_diff(target_group.sum());

            for (target_slot, target_item) in target_group.items().iter().enumerate() {
                if item.category() != target_item.category() {
                    continue;
                }

                let gap_after = gap_after_swap(
                    group.sum(),
                    target_group.sum(),
                    item.weight(),
                    target_item.weight(),
                );
                if gap_after < gap_before {
                    return Some(SwapCandidate {
                        slot,
                        target,
                        target_slot,
                        gap_before,
                        gap_after,
                    });
                }
            }
        }
    }

    None
}

/// `|(s1 - q1 + q2) - (s2 - q2 + q1)|`, i.e. `|s1 - s2 - 2·q1 + 2·q2|`.
///
/// `q1` is part of `s1` and `q2` part of `s2`, so neither side underflows.
const fn gap_after_swap(s1: u64, s2: u64, q1: u64, q2: u64) -> u64 {
    (s1 - q1 + q2).abs_diff(s2 - q2 + q1)
}
