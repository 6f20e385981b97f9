//! Walk a library plist and build track records.
//!
//! An iTunes/Apple Music export keeps its tracks in a dictionary of
//! dictionaries under the root dictionary:
//!
//! ```text
//! <plist><dict>
//!   <key>Tracks</key>
//!   <dict>
//!     <key>1204</key>
//!     <dict>
//!       <key>Track ID</key><integer>1204</integer>
//!       <key>Name</key><string>So What</string>
//!       ...
//!     </dict>
//!   </dict>
//! </dict></plist>
//! ```
//!
//! Every `dict` nested directly in a `dict` nested directly in a `dict` is
//! treated as one track. Playlists live under `array` elements and are
//! never matched.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use culler_core::{Library, Track};
use roxmltree::{Document, Node, ParsingOptions};

use crate::error::{ExtractError, ExtractResult};
use crate::fields::{normalize_field_name, star_rating, TrackField};

const DICT: &str = "dict";
const KEY: &str = "key";
const MAX_PERCENT: u8 = 100;

/// Read and extract a library export from disk.
///
/// The whole file is loaded before parsing starts.
pub fn parse_library_file(path: &Path) -> ExtractResult<Library> {
    log::info!("Reading library from {}", path.display());

    let bytes = std::fs::read(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let xml = std::str::from_utf8(&bytes).map_err(|source| ExtractError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;

    parse_library(xml)
}

/// Extract every track from a library export, in document order.
///
/// Any malformed track aborts the whole extraction.
pub fn parse_library(xml: &str) -> ExtractResult<Library> {
    // Library exports carry a plist DOCTYPE.
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options)?;

    let tracks = doc
        .descendants()
        .filter(|node| is_track_node(*node))
        .enumerate()
        .map(|(index, node)| parse_track(node, index))
        .collect::<ExtractResult<Vec<_>>>()?;

    log::info!("Extracted {} tracks", tracks.len());
    Ok(Library::new(tracks))
}

/// Whether `node` sits at the track position: `dict` in `dict` in `dict`.
fn is_track_node(node: Node<'_, '_>) -> bool {
    let parent = node.parent_element();
    let grandparent = parent.and_then(|p| p.parent_element());
    is_dict(Some(node)) && is_dict(parent) && is_dict(grandparent)
}

fn is_dict(node: Option<Node<'_, '_>>) -> bool {
    node.is_some_and(|n| n.has_tag_name(DICT))
}

#[derive(Debug, Clone, Copy)]
struct Captured<'a> {
    value: &'a str,
    renamed: bool,
}

/// Build a [`Track`] from one track dictionary.
///
/// `index` is the position of the dictionary among all track nodes and
/// only shows up in error messages.
pub fn parse_track(node: Node<'_, '_>, index: usize) -> ExtractResult<Track> {
    let mut fields: HashMap<TrackField, Captured<'_>> = HashMap::new();

    for key in node.descendants().filter(|n| n.has_tag_name(KEY)) {
        let raw_name = key.text().unwrap_or_default();
        let value = key
            .next_sibling_element()
            .ok_or_else(|| ExtractError::MissingValue {
                key: raw_name.to_string(),
            })?;

        let normalized = normalize_field_name(raw_name);
        let Some(field) = TrackField::lookup(&normalized) else {
            continue;
        };

        // A renamed field (Size, Total Time) overrides the plain one.
        let renamed = field.is_renamed_from(&normalized);
        let keep_previous = fields
            .get(&field)
            .is_some_and(|prev| prev.renamed && !renamed);
        if !keep_previous {
            fields.insert(
                field,
                Captured {
                    value: value.text().unwrap_or_default(),
                    renamed,
                },
            );
        }
    }

    let text = |field: TrackField| fields.get(&field).map(|c| c.value);
    let required = |field: TrackField| {
        text(field).ok_or(ExtractError::MissingField {
            field: field.attribute_name(),
            index,
        })
    };

    let track_id = parse_number(TrackField::TrackId, required(TrackField::TrackId)?)?;
    let mut track = Track::new(track_id, required(TrackField::Name)?);

    if let Some(artist) = text(TrackField::Artist) {
        track.artist = artist.to_string();
    }
    if let Some(album) = text(TrackField::Album) {
        track.album = album.to_string();
    }

    let percent = optional_number::<u8>(TrackField::Rating, text(TrackField::Rating))?;
    if let Some(p) = percent.filter(|p| *p > MAX_PERCENT) {
        return Err(ExtractError::InvalidField {
            field: TrackField::Rating.attribute_name(),
            value: p.to_string(),
            reason: format!("rating percentage exceeds {MAX_PERCENT}"),
        });
    }
    track.rating = star_rating(percent);

    track.track_number = optional_number(TrackField::TrackNumber, text(TrackField::TrackNumber))?;
    track.year = optional_number(TrackField::Year, text(TrackField::Year))?;
    track.file_size =
        optional_number(TrackField::FileSize, text(TrackField::FileSize))?.unwrap_or_default();
    track.time = optional_number(TrackField::Time, text(TrackField::Time))?.unwrap_or_default();

    log::debug!("Extracted {} (id {})", track, track.track_id);
    Ok(track)
}

fn parse_number<T>(field: TrackField, value: &str) -> ExtractResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ExtractError::InvalidField {
            field: field.attribute_name(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

fn optional_number<T>(field: TrackField, value: Option<&str>) -> ExtractResult<Option<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value.map(|v| parse_number(field, v)).transpose()
}
