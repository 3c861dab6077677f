//! Items, categories and groups.

use serde::{Deserialize, Serialize};

/// A named weight as it arrives from the input, before allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEntry {
    pub name: String,
    pub weight: u64,
}

impl WeightedEntry {
    pub fn new(name: impl Into<String>, weight: u64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// A named source of entries (an antenna feeding blocks, for instance).
///
/// Categories only order processing and decide swap eligibility. After
/// allocation they survive as the tag carried by each [`Item`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub items: Vec<WeightedEntry>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_item(mut self, name: impl Into<String>, weight: u64) -> Self {
        self.items.push(WeightedEntry::new(name, weight));
        self
    }

    pub fn push(&mut self, name: impl Into<String>, weight: u64) {
        self.items.push(WeightedEntry::new(name, weight));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of entry weights, `None` on overflow.
    #[must_use]
    pub fn total_weight(&self) -> Option<u64> {
        self.items
            .iter()
            .try_fold(0u64, |acc, entry| acc.checked_add(entry.weight))
    }
}

/// An allocated unit of weight, tagged with the category it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    name: String,
    weight: u64,
    category: String,
}

impl Item {
    /// Tag an input entry with its source category.
    pub fn tagged(entry: &WeightedEntry, category: &str) -> Self {
        Self {
            name: entry.name.clone(),
            weight: entry.weight,
            category: category.to_string(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn weight(&self) -> u64 {
        self.weight
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }
}

/// A bucket of items with a cached weight sum.
///
/// `sum` always equals the total weight of `items`. The fields are private so
/// that every mutation goes through a method that keeps the two in step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    id: usize,
    sum: u64,
    items: Vec<Item>,
}

impl Group {
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self {
            id,
            sum: 0,
            items: Vec::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    #[must_use]
    pub const fn sum(&self) -> u64 {
        self.sum
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item and add its weight to the sum.
    pub fn push(&mut self, item: Item) {
        self.sum += item.weight;
        self.items.push(item);
    }

    /// Recompute the sum from scratch and compare it with the cached one.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.items.iter().map(Item::weight).sum::<u64>() == self.sum
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

/// Trade the item at `left_slot` of `left` with the item at `right_slot` of
/// `right`, keeping both slots in place and adjusting both sums incrementally.
///
/// Panics if either slot is out of bounds.
pub(crate) fn exchange(left: &mut Group, left_slot: usize, right: &mut Group, right_slot: usize) {
    let left_weight = left.items[left_slot].weight;
    let right_weight = right.items[right_slot].weight;

    std::mem::swap(&mut left.items[left_slot], &mut right.items[right_slot]);

    left.sum = left.sum - left_weight + right_weight;
    right.sum = right.sum - right_weight + left_weight;
}
