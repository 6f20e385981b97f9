use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::model::{Track, TrackList};

/// How tracks are grouped into albums.
///
/// The two strategies differ when the same album name recurs across years:
/// `AlbumAndYear` keeps a 1999 and a 2009 "Greatest Hits" apart, while
/// `AlbumName` merges them. Neither separates albums that share both name
/// and year across different artists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GroupBy {
    #[default]
    AlbumAndYear,
    AlbumName,
}

impl GroupBy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AlbumAndYear => "album-and-year",
            Self::AlbumName => "album-name",
        }
    }

    /// The grouping key this strategy assigns to `track`.
    #[must_use]
    pub fn key_for(self, track: &Track) -> AlbumKey {
        match self {
            Self::AlbumAndYear => AlbumKey::new(track.album.clone(), track.year),
            Self::AlbumName => AlbumKey::new(track.album.clone(), None),
        }
    }
}

impl FromStr for GroupBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "album-and-year" => Ok(Self::AlbumAndYear),
            "album-name" | "album" => Ok(Self::AlbumName),
            _ => Err(Error::UnknownGroupBy(s.to_string())),
        }
    }
}

impl TryFrom<String> for GroupBy {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<GroupBy> for String {
    fn from(group_by: GroupBy) -> Self {
        group_by.as_str().to_string()
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The key an album is grouped under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AlbumKey {
    pub name: String,
    pub year: Option<i32>,
}

impl AlbumKey {
    #[must_use]
    pub fn new(name: impl Into<String>, year: Option<i32>) -> Self {
        Self {
            name: name.into(),
            year,
        }
    }
}

/// A non-empty group of tracks sharing an album name.
///
/// Rating statistics are computed once at construction. An `Album` is
/// never mutated afterwards, so they cannot go stale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Album {
    key: AlbumKey,
    tracks: TrackList,
    artists: Vec<String>,
    min_rating: u8,
    max_rating: u8,
    avg_rating: f64,
    percent_rated: f64,
}

impl Album {
    /// Build an album from tracks that all carry the same album name.
    ///
    /// The key's year is set only when every track agrees on it.
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        let first = tracks.first().ok_or(Error::EmptyAlbum)?;
        let year = first.year.filter(|y| tracks.iter().all(|t| t.year == Some(*y)));
        let key = AlbumKey::new(first.album.clone(), year);
        Self::with_key(key, tracks)
    }

    /// Build an album under an explicit grouping key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyAlbum`] when `tracks` is empty and
    /// [`Error::MixedAlbum`] when any track's album name differs from
    /// `key.name`.
    pub fn with_key(key: AlbumKey, tracks: Vec<Track>) -> Result<Self> {
        if tracks.is_empty() {
            return Err(Error::EmptyAlbum);
        }

        if let Some(stray) = tracks.iter().find(|t| t.album != key.name) {
            return Err(Error::MixedAlbum {
                expected: key.name.clone(),
                found: stray.album.clone(),
                track_id: stray.track_id,
            });
        }

        let mut artists: Vec<String> = tracks.iter().map(|t| t.artist.clone()).collect();
        artists.sort();
        artists.dedup();

        let ratings = || tracks.iter().map(|t| t.rating);
        let count = tracks.len() as f64;
        let min_rating = ratings().min().unwrap_or_default();
        let max_rating = ratings().max().unwrap_or_default();
        let avg_rating = ratings().map(f64::from).sum::<f64>() / count;
        let rated = tracks.iter().filter(|t| t.is_rated()).count();
        let percent_rated = rated as f64 / count;

        Ok(Self {
            key,
            tracks: TrackList::new(tracks),
            artists,
            min_rating,
            max_rating,
            avg_rating,
            percent_rated,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.key.name
    }

    #[must_use]
    pub const fn year(&self) -> Option<i32> {
        self.key.year
    }

    #[must_use]
    pub const fn key(&self) -> &AlbumKey {
        &self.key
    }

    #[must_use]
    pub const fn tracks(&self) -> &TrackList {
        &self.tracks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Always `false`; albums are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Distinct artist names, sorted ascending.
    #[must_use]
    pub fn artists(&self) -> &[String] {
        &self.artists
    }

    #[must_use]
    pub const fn min_rating(&self) -> u8 {
        self.min_rating
    }

    #[must_use]
    pub const fn max_rating(&self) -> u8 {
        self.max_rating
    }

    /// Arithmetic mean of the member ratings, unrated tracks counting as 0.
    #[must_use]
    pub const fn avg_rating(&self) -> f64 {
        self.avg_rating
    }

    /// Fraction of tracks with a non-zero rating, in `[0, 1]`.
    #[must_use]
    pub const fn percent_rated(&self) -> f64 {
        self.percent_rated
    }

    #[must_use]
    pub fn file_size(&self) -> u64 {
        self.tracks.file_size()
    }

    #[must_use]
    pub fn total_time(&self) -> u64 {
        self.tracks.total_time()
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Album: {} by {} with {} tracks",
            self.key.name,
            self.artists.join(","),
            self.tracks.len()
        )
    }
}
