use serde::Serialize;
use std::ops::Index;

use crate::model::Track;

/// An ordered collection of tracks.
///
/// Both [`Library`](crate::Library) and [`Album`](crate::Album) hold their
/// tracks in a `TrackList`, so totals are computed the same way for both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrackList {
    tracks: Vec<Track>,
}

impl TrackList {
    #[must_use]
    pub const fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Track] {
        &self.tracks
    }

    /// Sum of all file sizes, in bytes.
    #[must_use]
    pub fn file_size(&self) -> u64 {
        self.tracks.iter().map(|t| t.file_size).sum()
    }

    /// Sum of all play times, in milliseconds.
    #[must_use]
    pub fn total_time(&self) -> u64 {
        self.tracks.iter().map(|t| t.time).sum()
    }
}

impl From<Vec<Track>> for TrackList {
    fn from(tracks: Vec<Track>) -> Self {
        Self::new(tracks)
    }
}

impl FromIterator<Track> for TrackList {
    fn from_iter<I: IntoIterator<Item = Track>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for TrackList {
    type Item = Track;
    type IntoIter = std::vec::IntoIter<Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.into_iter()
    }
}

impl<'a> IntoIterator for &'a TrackList {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}

impl Index<usize> for TrackList {
    type Output = Track;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tracks[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TrackList {
        vec![
            Track::new(1, "a").with_file_size(100).with_time(1_000),
            Track::new(2, "b").with_file_size(250).with_time(2_500),
            Track::new(3, "c"),
        ]
        .into()
    }

    #[test]
    fn test_totals() {
        let tracks = sample();
        assert_eq!(tracks.len(), 3);
        assert_eq!(tracks.file_size(), 350);
        assert_eq!(tracks.total_time(), 3_500);
    }

    #[test]
    fn test_empty_totals() {
        let tracks = TrackList::default();
        assert!(tracks.is_empty());
        assert_eq!(tracks.file_size(), 0);
        assert_eq!(tracks.total_time(), 0);
    }

    #[test]
    fn test_collect_from_tracks() {
        let tracks: TrackList = (1..=3).map(|id| Track::new(id, "t").with_file_size(10)).collect();
        assert_eq!(tracks.len(), 3);
        assert_eq!(tracks.file_size(), 30);

        let ids: Vec<u64> = tracks.into_iter().map(|t| t.track_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_indexing_and_iteration_keep_order() {
        let tracks = sample();
        assert_eq!(tracks[1].name, "b");
        assert_eq!(tracks.get(2).map(|t| t.track_id), Some(3));
        assert!(tracks.get(3).is_none());

        let ids: Vec<u64> = (&tracks).into_iter().map(|t| t.track_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
