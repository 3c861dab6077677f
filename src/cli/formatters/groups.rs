//! Group listing formatter for `split`

use console::style;

use crate::cli::output::HumanLayout;
use crate::core::{Group, PartitionReport, SwapRecord};

const RULE: &str = "=================";

/// Text rendering of a partition report.
#[derive(Debug, Clone)]
pub struct GroupListing<'a> {
    pub report: &'a PartitionReport,
    pub group_unit: &'a str,
    pub item_unit: &'a str,
    /// Append the balancer's swap log.
    pub show_swaps: bool,
}

impl<'a> GroupListing<'a> {
    pub fn new(report: &'a PartitionReport, group_unit: &'a str, item_unit: &'a str) -> Self {
        Self {
            report,
            group_unit,
            item_unit,
            show_swaps: false,
        }
    }

    #[must_use]
    pub const fn with_swaps(mut self, show: bool) -> Self {
        self.show_swaps = show;
        self
    }

    /// Render the listing. Styling is dropped when `colored` is false.
    #[must_use]
    pub fn render(&self, colored: bool) -> String {
        let mut layout = HumanLayout::new();

        for group in &self.report.groups {
            layout.push_line(self.header(group, colored));
            for item in group.items() {
                layout.push_line(format!(
                    "Block: {} \t\tAntenna: {} \t\tQ: {} {}",
                    item.name(),
                    item.category(),
                    item.weight(),
                    self.item_unit
                ));
            }
            layout.blank();
        }

        if self.show_swaps && !self.report.swap_log.is_empty() {
            layout.section("Swaps");
            for swap in &self.report.swap_log {
                layout.bullet(&describe_swap(swap));
            }
            layout.blank();
        }

        layout.section("Summary");
        layout.kv("Groups", &self.report.group_count.to_string());
        layout.kv("Total", &format!("{} {}", self.report.total, self.group_unit));
        layout.kv(
            "Spread",
            &format!("{} {}", self.report.spread, self.group_unit),
        );
        if self.report.balanced {
            layout.kv("Swaps", &self.report.swaps.to_string());
        } else {
            layout.kv("Swaps", "skipped (--no-balance)");
        }

        layout.build()
    }

    fn header(&self, group: &Group, colored: bool) -> String {
        let id = style(format!("group: {}", group.id()))
            .yellow()
            .force_styling(colored);
        let sum = style(format!("Q: {} {}", group.sum(), self.group_unit))
            .yellow()
            .force_styling(colored);
        format!("{RULE} {id} - {sum} {RULE}")
    }
}

fn describe_swap(swap: &SwapRecord) -> String {
    format!(
        "[{}] {} (group {}) <-> {} (group {}): gap {} -> {}",
        swap.category,
        swap.item,
        swap.group,
        swap.target_item,
        swap.target_group,
        swap.gap_before,
        swap.gap_after
    )
}
