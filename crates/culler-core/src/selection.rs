//! Picking albums worth removing.
//!
//! An album is a removal candidate when most of it has been listened to
//! closely enough to be rated, yet no track earned a high rating.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::track::MAX_RATING;
use crate::model::Album;

/// Filter thresholds for removal candidates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Albums must have strictly more than this fraction of rated tracks.
    pub min_percent_rated: f64,

    /// Albums whose best track is rated above this are kept.
    pub max_rating: u8,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            min_percent_rated: 0.01,
            max_rating: 3,
        }
    }
}

impl Selection {
    pub fn new(min_percent_rated: f64, max_rating: u8) -> Result<Self> {
        if !(0.0..=1.0).contains(&min_percent_rated) {
            return Err(Error::InvalidSelection(format!(
                "min_percent_rated must be between 0 and 1, got {min_percent_rated}"
            )));
        }
        if max_rating > MAX_RATING {
            return Err(Error::InvalidSelection(format!(
                "max_rating must be at most {MAX_RATING}, got {max_rating}"
            )));
        }
        Ok(Self {
            min_percent_rated,
            max_rating,
        })
    }

    #[must_use]
    pub fn matches(&self, album: &Album) -> bool {
        album.percent_rated() > self.min_percent_rated && album.max_rating() <= self.max_rating
    }

    /// Sort albums by file size, largest first, and keep the candidates.
    ///
    /// Albums of equal size keep their incoming order.
    #[must_use]
    pub fn apply(&self, mut albums: Vec<Album>) -> Vec<Album> {
        albums.sort_by_key(|a| std::cmp::Reverse(a.file_size()));
        albums.retain(|a| self.matches(a));
        albums
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Track;

    fn album(name: &str, ratings: &[u8], size_per_track: u64) -> Album {
        let tracks = ratings
            .iter()
            .enumerate()
            .map(|(i, r)| {
                Track::new(i as u64, format!("{name} {i}"))
                    .with_album(name)
                    .with_rating(*r)
                    .with_file_size(size_per_track)
            })
            .collect();
        Album::new(tracks).unwrap()
    }

    #[test]
    fn test_default_thresholds() {
        let selection = Selection::default();
        assert!((selection.min_percent_rated - 0.01).abs() < f64::EPSILON);
        assert_eq!(selection.max_rating, 3);
    }

    #[test]
    fn test_matches() {
        let selection = Selection::default();
        assert!(selection.matches(&album("low", &[1, 2, 0], 1)));
        assert!(!selection.matches(&album("loved", &[1, 4], 1)));
        assert!(!selection.matches(&album("unrated", &[0, 0], 1)));
        assert!(selection.matches(&album("ceiling", &[3, 3], 1)));
    }

    #[test]
    fn test_apply_sorts_by_size_then_filters() {
        let albums = vec![
            album("small", &[1], 10),
            album("loved", &[5], 1_000),
            album("big", &[2, 2], 500),
            album("medium", &[3], 300),
        ];

        let picked = Selection::default().apply(albums);
        let names: Vec<&str> = picked.iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["big", "medium", "small"]);
    }

    #[test]
    fn test_apply_is_stable_for_equal_sizes() {
        let albums = vec![album("first", &[1], 100), album("second", &[1], 100)];
        let picked = Selection::default().apply(albums);
        assert_eq!(picked[0].name(), "first");
        assert_eq!(picked[1].name(), "second");
    }

    #[test]
    fn test_new_validates() {
        assert!(Selection::new(0.5, 2).is_ok());
        assert!(matches!(Selection::new(1.5, 2), Err(Error::InvalidSelection(_))));
        assert!(matches!(Selection::new(-0.1, 2), Err(Error::InvalidSelection(_))));
        assert!(matches!(Selection::new(0.5, 6), Err(Error::InvalidSelection(_))));
    }
}
