use std::collections::HashMap;

use proptest::prelude::*;

use groupbal::core::{
    BalanceMode, Category, Group, PartitionOptions, balance, balance_with, partition,
    partition_with,
};
use groupbal::test_utils::arbitrary;

fn arb_categories() -> impl Strategy<Value = Vec<Category>> {
    arbitrary::arb_categories(4, 10)
}

fn until_stable() -> PartitionOptions {
    PartitionOptions {
        mode: BalanceMode::UntilStable,
        ..PartitionOptions::default()
    }
}

fn square_sum(groups: &[Group]) -> u128 {
    groups
        .iter()
        .map(|group| u128::from(group.sum()) * u128::from(group.sum()))
        .sum()
}

/// item name -> (weight, category) over every group
fn placements(groups: &[Group]) -> HashMap<String, (u64, String)> {
    groups
        .iter()
        .flat_map(Group::items)
        .map(|item| {
            (
                item.name().to_string(),
                (item.weight(), item.category().to_string()),
            )
        })
        .collect()
}

fn entries(categories: &[Category]) -> HashMap<String, (u64, String)> {
    categories
        .iter()
        .flat_map(|category| {
            category
                .items
                .iter()
                .map(move |entry| (entry.name.clone(), (entry.weight, category.name.clone())))
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn every_item_lands_in_exactly_one_group(categories in arb_categories(), k in 1usize..7) {
        let result = partition(&categories, k).unwrap();
        let groups = result.groups();

        let placed: usize = groups.iter().map(Group::len).sum();
        let expected = entries(&categories);
        prop_assert_eq!(placed, expected.len());
        prop_assert_eq!(placements(groups), expected);
    }

    #[test]
    fn groups_have_ids_one_to_k(categories in arb_categories(), k in 1usize..7) {
        let result = partition(&categories, k).unwrap();
        let ids: Vec<usize> = result.groups().iter().map(Group::id).collect();
        prop_assert_eq!(ids, (1..=k).collect::<Vec<_>>());
    }

    #[test]
    fn sums_match_contents(categories in arb_categories(), k in 1usize..7) {
        let result = partition(&categories, k).unwrap();
        for group in result.groups() {
            prop_assert!(group.is_consistent());
        }
        let total: u64 = categories.iter().filter_map(Category::total_weight).sum();
        prop_assert_eq!(result.total(), total);
    }

    #[test]
    fn balancing_never_widens_squares(categories in arb_categories(), k in 1usize..7) {
        let raw = partition_with(&categories, k, PartitionOptions::unbalanced()).unwrap();
        let mut groups = raw.groups().to_vec();
        let before = square_sum(&groups);

        let report = balance(&mut groups);
        let after = square_sum(&groups);

        prop_assert!(after <= before);
        if report.swap_count() > 0 {
            prop_assert!(after < before);
        }
        for swap in &report.swaps {
            prop_assert!(swap.gap_after < swap.gap_before);
            prop_assert!(swap.group < swap.target_group);
        }
    }

    #[test]
    fn swaps_keep_items_in_their_category(categories in arb_categories(), k in 1usize..7) {
        let raw = partition_with(&categories, k, PartitionOptions::unbalanced()).unwrap();
        let balanced = partition(&categories, k).unwrap();

        let category_counts = |groups: &[Group]| -> Vec<Vec<usize>> {
            groups.iter().map(|group| {
                categories.iter().map(|category| {
                    group.items().iter()
                        .filter(|item| item.category() == category.name)
                        .count()
                }).collect()
            }).collect()
        };
        // A swap exchanges two items of one category, so per-group category
        // counts survive balancing.
        prop_assert_eq!(category_counts(raw.groups()), category_counts(balanced.groups()));
    }

    #[test]
    fn stable_balancing_is_idempotent(categories in arb_categories(), k in 1usize..7) {
        let result = partition_with(&categories, k, until_stable()).unwrap();
        let mut groups = result.groups().to_vec();
        let again = balance_with(&mut groups, BalanceMode::UntilStable);

        prop_assert_eq!(again.swap_count(), 0);
        prop_assert_eq!(again.sweeps, 1);
        prop_assert_eq!(groups.as_slice(), result.groups());
    }

    #[test]
    fn stable_output_is_a_local_fixed_point(categories in arb_categories(), k in 1usize..7) {
        let result = partition_with(&categories, k, until_stable()).unwrap();
        let groups = result.groups();

        for (i, left) in groups.iter().enumerate() {
            for right in &groups[i + 1..] {
                let gap = left.sum().abs_diff(right.sum());
                for a in left.items() {
                    for b in right.items().iter().filter(|b| b.category() == a.category()) {
                        let after = (left.sum() - a.weight() + b.weight())
                            .abs_diff(right.sum() - b.weight() + a.weight());
                        prop_assert!(after >= gap, "{} <-> {} would shrink {} to {}", a.name(), b.name(), gap, after);
                    }
                }
            }
        }
    }

    #[test]
    fn stable_mode_starts_with_the_single_pass(categories in arb_categories(), k in 1usize..7) {
        let single = partition(&categories, k).unwrap();
        let stable = partition_with(&categories, k, until_stable()).unwrap();

        let first_pass = &single.balance_report().unwrap().swaps;
        let all_swaps = &stable.balance_report().unwrap().swaps;
        prop_assert_eq!(single.balance_report().unwrap().sweeps, 1);
        prop_assert!(all_swaps.starts_with(first_pass));

        // When a second pass has nothing to do, both modes end in the same place.
        let mut groups = single.groups().to_vec();
        if balance(&mut groups).swap_count() == 0 {
            prop_assert_eq!(stable.groups(), single.groups());
            prop_assert_eq!(all_swaps.len(), first_pass.len());
        }
    }

    #[test]
    fn runs_are_deterministic(categories in arb_categories(), k in 1usize..7) {
        let first = partition(&categories, k).unwrap();
        let second = partition(&categories, k).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn single_group_takes_everything(categories in arb_categories()) {
        let result = partition(&categories, 1).unwrap();
        prop_assert_eq!(result.groups().len(), 1);
        prop_assert_eq!(result.spread(), 0);
        prop_assert_eq!(result.swap_count(), 0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Each swap lowers the sum of squared group sums by at least 2, which
    /// bounds the number of swaps by the starting value over 2.
    #[test]
    fn swap_count_is_bounded(weights in prop::collection::vec(1u64..50, 2..120), k in 2usize..5) {
        let mut category = Category::new("A");
        for (i, weight) in weights.iter().enumerate() {
            category.push(format!("a{i}"), *weight);
        }
        let categories = vec![category];

        let raw = partition_with(&categories, k, PartitionOptions::unbalanced()).unwrap();
        let bound = square_sum(raw.groups()) / 2;
        let mut groups = raw.groups().to_vec();
        let report = balance_with(&mut groups, BalanceMode::UntilStable);

        prop_assert!(report.swap_count() as u128 <= bound);
    }
}

#[test]
fn equal_weights_in_two_groups_settle_immediately() {
    let mut category = Category::new("A");
    for i in 0..400 {
        category.push(format!("a{i}"), 7);
    }
    let result = partition(&[category], 2).unwrap();

    assert_eq!(result.swap_count(), 0);
    assert_eq!(result.balance_report().unwrap().sweeps, 1);
    assert_eq!(result.spread(), 0);
}
