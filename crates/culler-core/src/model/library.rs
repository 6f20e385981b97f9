use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use crate::error::Result;
use crate::model::{Album, AlbumKey, GroupBy, Track, TrackList};

/// Every track read from one library export, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Library {
    tracks: TrackList,
}

impl Library {
    #[must_use]
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks: TrackList::new(tracks),
        }
    }

    #[must_use]
    pub const fn tracks(&self) -> &TrackList {
        &self.tracks
    }

    /// Number of tracks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Total file size of the library, in bytes.
    #[must_use]
    pub fn file_size(&self) -> u64 {
        self.tracks.file_size()
    }

    /// Total play time of the library, in milliseconds.
    #[must_use]
    pub fn total_time(&self) -> u64 {
        self.tracks.total_time()
    }

    /// Partition the library into albums.
    ///
    /// Albums come back in the order their key is first seen, and tracks
    /// keep their library order within each album. Every track ends up in
    /// exactly one album.
    pub fn group_into_albums(self, group_by: GroupBy) -> Result<Vec<Album>> {
        let mut groups: IndexMap<AlbumKey, Vec<Track>> = IndexMap::new();
        for track in self.tracks {
            groups.entry(group_by.key_for(&track)).or_default().push(track);
        }

        log::debug!("Grouped tracks into {} albums by {}", groups.len(), group_by);

        groups
            .into_iter()
            .map(|(key, tracks)| Album::with_key(key, tracks))
            .collect()
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Library with {} tracks", self.tracks.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: u64, album: &str, year: Option<i32>, rating: u8) -> Track {
        let t = Track::new(id, format!("track {id}"))
            .with_album(album)
            .with_rating(rating)
            .with_file_size(id * 100)
            .with_time(id * 1_000);
        match year {
            Some(y) => t.with_year(y),
            None => t,
        }
    }

    #[test]
    fn test_library_totals() {
        let library = Library::new(vec![
            track(1, "A", None, 0),
            track(2, "A", None, 0),
            track(3, "B", None, 0),
        ]);
        assert_eq!(library.len(), 3);
        assert_eq!(library.file_size(), 600);
        assert_eq!(library.total_time(), 6_000);
        assert_eq!(format!("{library}"), "Library with 3 tracks");
    }

    #[test]
    fn test_group_two_albums() {
        let library = Library::new(vec![
            track(1, "A", None, 1),
            track(2, "A", None, 2),
            track(3, "B", None, 0),
        ]);

        let albums = library.group_into_albums(GroupBy::AlbumAndYear).unwrap();
        assert_eq!(albums.len(), 2);

        let a = &albums[0];
        assert_eq!(a.name(), "A");
        assert!((a.avg_rating() - 1.5).abs() < f64::EPSILON);
        assert!((a.percent_rated() - 1.0).abs() < f64::EPSILON);
        assert_eq!(a.max_rating(), 2);

        let b = &albums[1];
        assert_eq!(b.name(), "B");
        assert!(b.percent_rated().abs() < f64::EPSILON);
    }

    #[test]
    fn test_grouping_preserves_first_seen_order() {
        let library = Library::new(vec![
            track(1, "C", None, 0),
            track(2, "A", None, 0),
            track(3, "C", None, 0),
            track(4, "B", None, 0),
            track(5, "A", None, 0),
        ]);

        let albums = library.group_into_albums(GroupBy::AlbumName).unwrap();
        let names: Vec<&str> = albums.iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);

        let ids: Vec<u64> = albums[0].tracks().iter().map(|t| t.track_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_grouping_strategies_differ_on_year() {
        let tracks = vec![
            track(1, "Greatest Hits", Some(1999), 0),
            track(2, "Greatest Hits", Some(2009), 0),
            track(3, "Greatest Hits", Some(1999), 0),
        ];

        let by_year = Library::new(tracks.clone())
            .group_into_albums(GroupBy::AlbumAndYear)
            .unwrap();
        assert_eq!(by_year.len(), 2);
        assert_eq!(by_year[0].year(), Some(1999));
        assert_eq!(by_year[0].len(), 2);
        assert_eq!(by_year[1].year(), Some(2009));

        let by_name = Library::new(tracks)
            .group_into_albums(GroupBy::AlbumName)
            .unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].year(), None);
        assert_eq!(by_name[0].len(), 3);
    }

    #[test]
    fn test_grouping_is_a_partition() {
        let tracks: Vec<Track> = (1..=20)
            .map(|id| {
                let album = ["A", "B", "C"][(id % 3) as usize];
                let year = if id % 2 == 0 { Some(2000) } else { None };
                track(id, album, year, (id % 6) as u8)
            })
            .collect();
        let library = Library::new(tracks);
        let total = library.len();

        let albums = library.group_into_albums(GroupBy::AlbumAndYear).unwrap();
        assert_eq!(albums.iter().map(Album::len).sum::<usize>(), total);

        let mut ids: Vec<u64> = albums
            .iter()
            .flat_map(|a| a.tracks().iter().map(|t| t.track_id))
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=20).collect::<Vec<u64>>());
    }

    #[test]
    fn test_empty_library_groups_to_nothing() {
        let albums = Library::default()
            .group_into_albums(GroupBy::AlbumAndYear)
            .unwrap();
        assert!(albums.is_empty());
    }
}
