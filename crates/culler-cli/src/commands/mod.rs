pub mod config;
pub mod recommend;
pub mod stats;

use anyhow::{Context, Result};
use culler_core::Library;
use std::path::Path;

pub use recommend::{run_recommend, RecommendArgs};
pub use stats::show_stats;

/// Check the export exists, then extract it.
fn load_library(path: &Path) -> Result<Library> {
    if !path.exists() {
        anyhow::bail!(
            "Library XML file does not exist: {}\n\nIt is usually found at ~/Music/Music/Library.xml \
             after File > Library > Export Library.",
            path.display()
        );
    }

    culler_extract::parse_library_file(path)
        .with_context(|| format!("Failed to extract tracks from {}", path.display()))
}
