use anyhow::Result;
use culler_core::GroupBy;
use std::path::PathBuf;

use crate::config::Config;
use crate::report::{self, AlbumSummary};

/// Options for `culler recommend`; unset values fall back to [`Config`].
#[derive(Debug)]
pub struct RecommendArgs {
    pub library: PathBuf,
    pub group_by: Option<GroupBy>,
    pub min_percent_rated: Option<f64>,
    pub max_rating: Option<u8>,
    pub json: bool,
}

/// Print albums that are mostly rated and rated low, largest first.
pub fn run_recommend(args: RecommendArgs, config: &Config) -> Result<()> {
    let selection = config.selection(args.min_percent_rated, args.max_rating)?;
    let group_by = args.group_by.unwrap_or(config.group_by);

    let library = super::load_library(&args.library)?;
    log::info!("Loaded {}", library);

    let albums = library.group_into_albums(group_by)?;
    let album_count = albums.len();
    let picked = selection.apply(albums);
    log::info!(
        "{} of {} albums match (percent rated > {}, max rating <= {})",
        picked.len(),
        album_count,
        selection.min_percent_rated,
        selection.max_rating
    );

    if args.json {
        let summaries: Vec<AlbumSummary<'_>> = picked.iter().map(AlbumSummary::from).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        for album in &picked {
            println!("{}", report::album_line(album));
        }
    }

    Ok(())
}
