pub mod album;
pub mod library;
pub mod track;
pub mod track_list;

pub use album::{Album, AlbumKey, GroupBy};
pub use library::Library;
pub use track::Track;
pub use track_list::TrackList;
