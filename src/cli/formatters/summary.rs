//! Input summary formatter for `check`

use crate::cli::output::HumanLayout;
use crate::core::InputSummary;

/// Render an input summary as a title, key/value block and per-category bullets.
#[must_use]
pub fn render_summary(summary: &InputSummary, group_unit: &str) -> String {
    let mut layout = HumanLayout::new();
    layout.title("Input OK");
    layout.kv("Groups", &summary.groups.to_string());
    layout.kv("Categories", &summary.categories.len().to_string());
    layout.kv("Items", &summary.item_count.to_string());
    layout.kv("Total", &format!("{} {group_unit}", summary.total));
    layout.kv(
        "Per group",
        &format!("{:.2} {group_unit}", summary.target_per_group),
    );
    layout.blank();
    layout.section("Categories");
    for category in &summary.categories {
        layout.bullet(&format!(
            "{}: {} items, {} {group_unit}",
            category.name, category.items, category.total
        ));
    }
    layout.build()
}
