use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot build an album from zero tracks")]
    EmptyAlbum,

    #[error("track {track_id} belongs to album {found:?}, expected {expected:?}")]
    MixedAlbum {
        expected: String,
        found: String,
        track_id: u64,
    },

    #[error("unknown grouping strategy: {0}")]
    UnknownGroupBy(String),

    #[error("invalid selection: {0}")]
    InvalidSelection(String),
}

pub type Result<T> = std::result::Result<T, Error>;
