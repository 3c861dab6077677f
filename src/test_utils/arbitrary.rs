//! Proptest strategies for valid inputs and configs.

use proptest::prelude::*;

use crate::config::{Config, InputConfig, OutputConfig, PartitionConfig};
use crate::core::Category;

fn arb_weights(max_items: usize) -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..1_000, 1..=max_items)
}

/// Valid input: 1..=`max_categories` uniquely named, non-empty categories.
///
/// Item names are `<category><index>` so they stay unique across the input.
pub fn arb_categories(
    max_categories: usize,
    max_items: usize,
) -> impl Strategy<Value = Vec<Category>> {
    prop::collection::vec(arb_weights(max_items), 1..=max_categories).prop_map(|columns| {
        columns
            .into_iter()
            .enumerate()
            .map(|(c, weights)| {
                let name = format!("C{c}");
                weights
                    .into_iter()
                    .enumerate()
                    .fold(Category::new(&name), |category, (i, weight)| {
                        category.with_item(format!("{name}-{i}"), weight)
                    })
            })
            .collect()
    })
}

fn arb_partition() -> impl Strategy<Value = PartitionConfig> {
    (1usize..64, any::<bool>(), any::<bool>()).prop_map(|(groups, balance, until_stable)| {
        PartitionConfig {
            groups,
            balance,
            until_stable,
        }
    })
}

fn arb_input() -> impl Strategy<Value = InputConfig> {
    (prop_oneof![Just(","), Just(";"), Just("|"), Just("\\t")], 1usize..5).prop_map(
        |(delimiter, header_rows)| InputConfig {
            delimiter: delimiter.to_string(),
            header_rows,
        },
    )
}

fn arb_output() -> impl Strategy<Value = OutputConfig> {
    (
        prop_oneof![
            Just("human"),
            Just("json"),
            Just("jsonl"),
            Just("plain"),
            Just("tsv")
        ],
        "[a-zA-Z/³]{1,6}",
        "[a-zA-Z/]{1,6}",
        any::<bool>(),
    )
        .prop_map(|(format, group_unit, item_unit, show_swaps)| OutputConfig {
            format: format.to_string(),
            group_unit,
            item_unit,
            show_swaps,
        })
}

pub fn arb_config() -> impl Strategy<Value = Config> {
    (arb_partition(), arb_input(), arb_output()).prop_map(|(partition, input, output)| Config {
        partition,
        input,
        output,
    })
}
