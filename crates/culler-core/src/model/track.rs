use serde::Serialize;
use std::fmt;

/// Highest star rating a track can carry.
pub const MAX_RATING: u8 = 5;

/// One song entry from a music library export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    /// Library-wide unique identifier.
    pub track_id: u64,

    pub name: String,

    pub artist: String,

    pub album: String,

    /// Star rating, always within `0..=5`. Zero means unrated.
    pub rating: u8,

    pub track_number: Option<u32>,

    pub year: Option<i32>,

    /// File size in bytes.
    pub file_size: u64,

    /// Play time in milliseconds.
    pub time: u64,
}

impl Track {
    #[must_use]
    pub fn new(track_id: u64, name: impl Into<String>) -> Self {
        Self {
            track_id,
            name: name.into(),
            artist: String::new(),
            album: String::new(),
            rating: 0,
            track_number: None,
            year: None,
            file_size: 0,
            time: 0,
        }
    }

    #[must_use]
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = artist.into();
        self
    }

    #[must_use]
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = album.into();
        self
    }

    /// Set the star rating. Values above five stars are clamped.
    #[must_use]
    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = rating.min(MAX_RATING);
        self
    }

    #[must_use]
    pub const fn with_track_number(mut self, track_number: u32) -> Self {
        self.track_number = Some(track_number);
        self
    }

    #[must_use]
    pub const fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    #[must_use]
    pub const fn with_file_size(mut self, file_size: u64) -> Self {
        self.file_size = file_size;
        self
    }

    #[must_use]
    pub const fn with_time(mut self, time: u64) -> Self {
        self.time = time;
        self
    }

    /// Whether the track carries a non-zero star rating.
    #[must_use]
    pub const fn is_rated(&self) -> bool {
        self.rating > 0
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Track: {} by {}, Album: {}, Rating: {}",
            self.name, self.artist, self.album, self.rating
        )
    }
}
