//! End-to-end checks of grouping, album statistics and selection.

use culler_core::{Album, Error, GroupBy, Library, Selection, Track};

fn rated(id: u64, artist: &str, album: &str, stars: u8) -> Track {
    Track::new(id, format!("song {id}"))
        .with_artist(artist)
        .with_album(album)
        .with_rating(stars)
}

/// Two tracks in "A" rated one and two stars, one unrated track in "B".
#[test]
fn test_three_track_library() {
    let library = Library::new(vec![
        rated(1, "Artist", "A", 1),
        rated(2, "Artist", "A", 2),
        rated(3, "Artist", "B", 0),
    ]);

    let albums = library.group_into_albums(GroupBy::AlbumAndYear).unwrap();
    assert_eq!(albums.len(), 2);

    assert!((albums[0].avg_rating() - 1.5).abs() < f64::EPSILON);
    assert!((albums[0].percent_rated() - 1.0).abs() < f64::EPSILON);
    assert_eq!(albums[0].max_rating(), 2);
    assert!(albums[1].percent_rated().abs() < f64::EPSILON);
}

#[test]
fn test_percent_rated_stays_in_unit_interval() {
    for rated_count in 0..=6u64 {
        let tracks = (0..6)
            .map(|i| rated(i, "X", "Album", u8::from(i < rated_count) * 3))
            .collect();
        let album = Album::new(tracks).unwrap();
        let pct = album.percent_rated();
        assert!((0.0..=1.0).contains(&pct), "{pct} out of range");
        assert!((pct - rated_count as f64 / 6.0).abs() < 1e-9);
    }
}

#[test]
fn test_zero_track_album_fails_with_defined_error() {
    let err = Album::new(Vec::new()).unwrap_err();
    assert!(matches!(err, Error::EmptyAlbum));
    assert_eq!(err.to_string(), "cannot build an album from zero tracks");
}

#[test]
fn test_recommendation_flow() {
    let mut tracks = Vec::new();
    let mut id = 0;
    for (album, stars, size) in [
        ("Forgettable", [2u8, 1, 0], 40_000_000u64),
        ("Favourite", [5, 4, 5], 90_000_000),
        ("Unheard", [0, 0, 0], 80_000_000),
        ("Meh", [3, 3, 2], 60_000_000),
    ] {
        for s in stars {
            id += 1;
            tracks.push(rated(id, "Band", album, s).with_file_size(size / 3));
        }
    }

    let albums = Library::new(tracks)
        .group_into_albums(GroupBy::AlbumName)
        .unwrap();
    let picked = Selection::default().apply(albums);

    let names: Vec<&str> = picked.iter().map(|a| a.name()).collect();
    assert_eq!(names, vec!["Meh", "Forgettable"]);
}
