use std::time::Instant;

use tracing_subscriber::EnvFilter;

use crate::core::Group;

/// Banner-style logger for long-running tests.
///
/// Creating one also routes `tracing` output through the test harness
/// (`RUST_LOG` controls the level, `debug` by default), so a failing test
/// prints the placements and swaps that led to it.
pub struct TestLogger {
    test_name: String,
    start_time: Instant,
}

impl TestLogger {
    pub fn new(test_name: &str) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();

        let separator = "=".repeat(60);
        println!("\n{separator}");
        println!("[TEST START] {test_name}");
        println!("{separator}");
        Self {
            test_name: test_name.to_string(),
            start_time: Instant::now(),
        }
    }

    pub fn log_input<T: std::fmt::Debug>(&self, name: &str, value: &T) {
        println!("[INPUT] {name}: {value:?}");
    }

    /// One line per group: id, sum, then `item:weight` pairs.
    pub fn log_groups(&self, label: &str, groups: &[Group]) {
        println!("[GROUPS] {label}");
        for group in groups {
            let items: Vec<String> = group
                .items()
                .iter()
                .map(|item| format!("{}:{}", item.name(), item.weight()))
                .collect();
            println!("  {:>3} sum={:<8} [{}]", group.id(), group.sum(), items.join(", "));
        }
    }

    pub fn log_expected<T: std::fmt::Debug>(&self, value: &T) {
        println!("[EXPECTED] {value:?}");
    }

    pub fn log_actual<T: std::fmt::Debug>(&self, value: &T) {
        println!("[ACTUAL] {value:?}");
    }

    pub fn pass(&self) {
        let elapsed = self.start_time.elapsed();
        println!("[RESULT] {} PASSED in {elapsed:?}", self.test_name);
        println!("{}\n", "=".repeat(60));
    }

    pub fn fail(&self, reason: &str) {
        let elapsed = self.start_time.elapsed();
        println!("[RESULT] {} FAILED in {elapsed:?}", self.test_name);
        println!("[REASON] {reason}");
        println!("{}\n", "=".repeat(60));
    }

    pub fn test_name(&self) -> &str {
        &self.test_name
    }
}
