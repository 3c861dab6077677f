//! Serializable views of a partition and of its input.

use serde::Serialize;

use super::balance::SwapRecord;
use super::partition::Partition;
use super::types::{Category, Group};

/// What the renderers consume: groups by ascending id plus run statistics.
#[derive(Debug, Clone, Serialize)]
pub struct PartitionReport {
    pub group_count: usize,
    pub total: u64,
    pub spread: u64,
    pub balanced: bool,
    pub swaps: usize,
    pub groups: Vec<Group>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub swap_log: Vec<SwapRecord>,
}

impl PartitionReport {
    #[must_use]
    pub fn new(partition: &Partition, include_swap_log: bool) -> Self {
        let swap_log = match (include_swap_log, partition.balance_report()) {
            (true, Some(report)) => report.swaps.clone(),
            _ => Vec::new(),
        };

        Self {
            group_count: partition.groups().len(),
            total: partition.total(),
            spread: partition.spread(),
            balanced: partition.balance_report().is_some(),
            swaps: partition.swap_count(),
            groups: partition.groups().to_vec(),
            swap_log,
        }
    }
}

/// Per-category line of an input summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub items: usize,
    pub total: u64,
}

/// Shape of validated input, reported by `check`.
#[derive(Debug, Clone, Serialize)]
pub struct InputSummary {
    pub groups: usize,
    pub categories: Vec<CategorySummary>,
    pub item_count: usize,
    pub total: u64,
    /// Total divided by the group count, the sum every group would hit in a
    /// perfect split.
    pub target_per_group: f64,
}

impl InputSummary {
    /// Build a summary. Expects input that already passed validation.
    #[must_use]
    pub fn new(categories: &[Category], groups: usize) -> Self {
        let categories: Vec<CategorySummary> = categories
            .iter()
            .map(|category| CategorySummary {
                name: category.name.clone(),
                items: category.len(),
                total: category.total_weight().unwrap_or(u64::MAX),
            })
            .collect();
        let item_count = categories.iter().map(|c| c.items).sum();
        let total = categories.iter().map(|c| c.total).sum();

        #[allow(clippy::cast_precision_loss)]
        let target_per_group = if groups == 0 {
            0.0
        } else {
            total as f64 / groups as f64
        };

        Self {
            groups,
            categories,
            item_count,
            total,
            target_per_group,
        }
    }
}
