//! Console and JSON rendering of albums and library totals.

use culler_core::Album;
use serde::Serialize;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// One recommended album, as emitted by `--json`.
#[derive(Debug, Serialize)]
pub struct AlbumSummary<'a> {
    pub artists: &'a [String],
    pub album: &'a str,
    pub year: Option<i32>,
    pub tracks: usize,
    pub file_size: u64,
    pub percent_rated: f64,
    pub min_rating: u8,
    pub max_rating: u8,
    pub avg_rating: f64,
}

impl<'a> From<&'a Album> for AlbumSummary<'a> {
    fn from(album: &'a Album) -> Self {
        Self {
            artists: album.artists(),
            album: album.name(),
            year: album.year(),
            tracks: album.len(),
            file_size: album.file_size(),
            percent_rated: album.percent_rated(),
            min_rating: album.min_rating(),
            max_rating: album.max_rating(),
            avg_rating: album.avg_rating(),
        }
    }
}

/// One console line per album:
/// `artists - album - tracks: N - size: NMB - N% rated - max N - avg N.NN`.
pub fn album_line(album: &Album) -> String {
    format!(
        "{} - {} - tracks: {} - size: {:.0}MB - {:.0}% rated - max {} - avg {:.2}",
        album.artists().join(","),
        album.name(),
        album.len(),
        megabytes(album.file_size()),
        album.percent_rated() * 100.0,
        album.max_rating(),
        album.avg_rating()
    )
}

pub fn megabytes(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Render milliseconds as `H:MM:SS`.
pub fn duration(millis: u64) -> String {
    let secs = millis / 1000;
    format!("{}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}
