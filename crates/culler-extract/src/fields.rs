//! Field names and value conversions for library track dictionaries.

use culler_core::model::track::MAX_RATING;

/// A `Track` attribute that can be filled from a library field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackField {
    TrackId,
    Name,
    Artist,
    Album,
    Rating,
    TrackNumber,
    Year,
    FileSize,
    Time,
}

/// Normalized library field name to the attribute it fills.
///
/// Anything not listed here (`kind`, `date_added`, `persistent_id`, ...)
/// is dropped during extraction.
const FIELD_TABLE: &[(&str, TrackField)] = &[
    ("track_id", TrackField::TrackId),
    ("name", TrackField::Name),
    ("artist", TrackField::Artist),
    ("album", TrackField::Album),
    ("rating", TrackField::Rating),
    ("track_number", TrackField::TrackNumber),
    ("year", TrackField::Year),
    ("file_size", TrackField::FileSize),
    ("size", TrackField::FileSize),
    ("time", TrackField::Time),
    ("total_time", TrackField::Time),
];

impl TrackField {
    /// Look up the attribute for an already normalized field name.
    #[must_use]
    pub fn lookup(normalized: &str) -> Option<Self> {
        FIELD_TABLE
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, field)| *field)
    }

    /// The `Track` attribute name.
    #[must_use]
    pub const fn attribute_name(self) -> &'static str {
        match self {
            Self::TrackId => "track_id",
            Self::Name => "name",
            Self::Artist => "artist",
            Self::Album => "album",
            Self::Rating => "rating",
            Self::TrackNumber => "track_number",
            Self::Year => "year",
            Self::FileSize => "file_size",
            Self::Time => "time",
        }
    }

    /// Whether `normalized` reaches this attribute through a rename
    /// (`size` -> `file_size`, `total_time` -> `time`).
    #[must_use]
    pub fn is_renamed_from(self, normalized: &str) -> bool {
        self.attribute_name() != normalized
    }
}

/// Normalize a library field name: `"Total Time"` becomes `"total_time"`.
///
/// Applying it twice gives the same result as applying it once.
#[must_use]
pub fn normalize_field_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Convert a stored percentage rating (0, 20, ..., 100) to stars.
///
/// A missing rating counts as zero stars.
#[must_use]
pub fn star_rating(percent: Option<u8>) -> u8 {
    percent.map_or(0, |p| (p / 20).min(MAX_RATING))
}
