//! Validation plus the allocate-then-balance pipeline.

use std::collections::HashSet;
use std::num::NonZeroUsize;

use tracing::info;

use crate::error::{GbError, Result};

use super::allocate::allocate;
use super::balance::{BalanceMode, BalanceReport, balance_with};
use super::ordering::sort_groups_by_id;
use super::types::{Category, Group};

/// Knobs for [`partition_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionOptions {
    /// Run the swap balancer after the initial allocation.
    pub balance: bool,
    pub mode: BalanceMode,
}

impl Default for PartitionOptions {
    fn default() -> Self {
        Self {
            balance: true,
            mode: BalanceMode::SinglePass,
        }
    }
}

impl PartitionOptions {
    /// Allocation only.
    #[must_use]
    pub fn unbalanced() -> Self {
        Self {
            balance: false,
            ..Self::default()
        }
    }
}

/// The groups produced by one run, sorted by ascending id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    groups: Vec<Group>,
    balance: Option<BalanceReport>,
}

impl Partition {
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Balancer outcome, `None` when balancing was skipped.
    #[must_use]
    pub const fn balance_report(&self) -> Option<&BalanceReport> {
        self.balance.as_ref()
    }

    #[must_use]
    pub fn swap_count(&self) -> usize {
        self.balance.as_ref().map_or(0, BalanceReport::swap_count)
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.groups.iter().map(Group::sum).sum()
    }

    /// Heaviest group sum minus lightest group sum.
    #[must_use]
    pub fn spread(&self) -> u64 {
        spread_of(&self.groups)
    }

    pub fn into_groups(self) -> Vec<Group> {
        self.groups
    }
}

/// Partition `categories` into `k` groups with default options.
pub fn partition(categories: &[Category], k: usize) -> Result<Partition> {
    partition_with(categories, k, PartitionOptions::default())
}

/// Validate the input, allocate, sort by id and (optionally) balance.
///
/// Validation is the only fallible step; nothing is allocated when it fails.
pub fn partition_with(
    categories: &[Category],
    k: usize,
    options: PartitionOptions,
) -> Result<Partition> {
    let k = validate(categories, k)?;

    let mut groups = allocate(categories, k);
    sort_groups_by_id(&mut groups);
    info!(
        groups = groups.len(),
        categories = categories.len(),
        spread = spread_of(&groups),
        "initial allocation done"
    );

    let report = options
        .balance
        .then(|| balance_with(&mut groups, options.mode));

    let partition = Partition {
        groups,
        balance: report,
    };
    info!(
        total = partition.total(),
        spread = partition.spread(),
        swaps = partition.swap_count(),
        "partition complete"
    );
    Ok(partition)
}

/// Check the preconditions of the allocator.
///
/// Rejects a zero group count, blank or duplicate category names, empty
/// categories, and totals that do not fit in a `u64`.
pub fn validate(categories: &[Category], k: usize) -> Result<NonZeroUsize> {
    let k = NonZeroUsize::new(k)
        .ok_or_else(|| GbError::InvalidInput("group count must be at least 1".to_string()))?;

    let mut seen: HashSet<&str> = HashSet::new();
    let mut total: u64 = 0;
    for category in categories {
        if category.name.trim().is_empty() {
            return Err(GbError::InvalidInput(
                "category name must not be blank".to_string(),
            ));
        }
        if !seen.insert(category.name.as_str()) {
            return Err(GbError::InvalidInput(format!(
                "duplicate category '{}'",
                category.name
            )));
        }
        if category.is_empty() {
            return Err(GbError::InvalidInput(format!(
                "category '{}' has no items",
                category.name
            )));
        }
        total = category
            .total_weight()
            .and_then(|weight| total.checked_add(weight))
            .ok_or_else(|| GbError::InvalidInput("total weight overflows u64".to_string()))?;
    }

    Ok(k)
}

fn spread_of(groups: &[Group]) -> u64 {
    let max = groups.iter().map(Group::sum).max().unwrap_or(0);
    let min = groups.iter().map(Group::sum).min().unwrap_or(0);
    max - min
}
