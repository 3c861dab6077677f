//! Partitioning core: greedy allocation followed by swap balancing.

pub mod allocate;
pub mod balance;
pub mod ordering;
pub mod partition;
pub mod report;
pub mod types;

pub use allocate::allocate;
pub use balance::{BalanceMode, BalanceReport, SwapRecord, balance, balance_with};
pub use partition::{Partition, PartitionOptions, partition, partition_with, validate};
pub use report::{CategorySummary, InputSummary, PartitionReport};
pub use types::{Category, Group, Item, WeightedEntry};
