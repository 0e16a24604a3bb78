use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::Config;

pub const LANDING_HEADER: &str =
    "name,category,description,sections,cta_strategy,best_for,conversion_tips,complexity,keywords";
pub const PRACTICES_HEADER: &str =
    "stack,category,topic,practice,anti_pattern,code_example,benefits,complexity";
pub const PATTERNS_HEADER: &str = "stack,name,description,use_case,implementation,pros,cons";
pub const PERFORMANCE_HEADER: &str =
    "stack,topic,technique,impact,effort,description,code_snippet";
pub const UX_HEADER: &str = "domain,topic,best_practice,anti_pattern,example,impact,complexity";
pub const COMPONENTS_HEADER: &str =
    "name,category,framework,code,dependencies,props,preview,description";

/// Isolated data directory for catalog store files.
pub struct CatalogFixture {
    pub temp_dir: TempDir,
    pub data_path: PathBuf,
}

impl Default for CatalogFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFixture {
    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().to_path_buf();
        println!("[FIXTURE] Created temp directory: {data_path:?}");
        Self {
            temp_dir,
            data_path,
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.data_path
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

    /// Write `header` followed by `rows` as a CSV store file.
    pub fn create_store(&self, file_name: &str, header: &str, rows: &[&str]) -> PathBuf {
        let mut content = String::from(header);
        content.push('\n');
        for row in rows {
            content.push_str(row);
            content.push('\n');
        }
        self.create_file(file_name, &content)
    }

    /// Configuration pointing every store at this fixture.
    #[must_use]
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.data.dir.clone_from(&self.data_path);
        config
    }
}

impl Drop for CatalogFixture {
    fn drop(&mut self) {
        println!("[FIXTURE] Cleaning up temp directory: {:?}", self.data_path);
    }
}
