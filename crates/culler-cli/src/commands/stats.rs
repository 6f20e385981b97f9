use anyhow::Result;
use culler_core::GroupBy;
use std::path::PathBuf;

use crate::report;

/// Print library totals and the album count under `group_by`.
pub fn show_stats(library_path: PathBuf, group_by: GroupBy) -> Result<()> {
    let library = super::load_library(&library_path)?;

    let track_count = library.len();
    let rated = library.tracks().iter().filter(|t| t.is_rated()).count();
    let file_size = library.file_size();
    let total_time = library.total_time();
    let albums = library.group_into_albums(group_by)?;

    println!("\n📊 Library Status\n");
    println!("  File: {}", library_path.display());
    println!("  Tracks: {}", track_count);
    println!("  Rated tracks: {}", rated);
    println!("  Albums ({}): {}", group_by, albums.len());
    println!("  Total size: {:.0}MB", report::megabytes(file_size));
    println!("  Total time: {}", report::duration(total_time));

    Ok(())
}
