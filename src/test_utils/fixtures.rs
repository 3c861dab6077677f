use std::path::PathBuf;

use tempfile::TempDir;

use crate::core::Category;

/// Two categories in the paired-column layout, split 10/10 over two groups.
pub const SMALL_TABLE: &str = "A,,B,\nBlock,Q,Block,Q\na1,10,b1,6\na2,4,,\n";

/// Greedy allocation leaves groups at 19/11; one same-category swap brings
/// them to 12/18.
pub const SWAP_TABLE: &str = "A,,B,\nBlock,Q,Block,Q\na1,8,b1,11\na2,10,,\na3,1,,\n";

/// Three antennas feeding twelve blocks, the shape of a real irrigation sheet.
pub const SITE_TABLE: &str = "\
North,,South,,East,
Block,Q,Block,Q,Block,Q
n1,120,s1,60,e1,200
n2,80,s2,75,e2,150
n3,45,s3,90,e3,35
n4,30,,,e4,110
,,,,e5,95
";

/// [`SMALL_TABLE`] as categories.
#[must_use]
pub fn small_categories() -> Vec<Category> {
    vec![
        Category::new("A").with_item("a1", 10).with_item("a2", 4),
        Category::new("B").with_item("b1", 6),
    ]
}

/// Test fixture providing isolated filesystem environment.
pub struct UnitTestFixture {
    pub temp_dir: TempDir,
    pub data_path: PathBuf,
}

impl UnitTestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().to_path_buf();

        println!("[FIXTURE] Created temp directory: {:?}", data_path);

        Self { temp_dir, data_path }
    }

    /// Create a test file with content.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.data_path.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        println!(
            "[FIXTURE] Created file: {:?} ({} bytes)",
            full_path,
            content.len()
        );
        full_path
    }

    /// Write a paired-column table.
    pub fn create_table(&self, name: &str, content: &str) -> PathBuf {
        self.create_file(&format!("tables/{name}.csv"), content)
    }
}

impl Drop for UnitTestFixture {
    fn drop(&mut self) {
        println!("[FIXTURE] Cleaning up temp directory: {:?}", self.data_path);
    }
}
