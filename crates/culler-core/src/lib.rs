//! Core domain model for culler.
//!
//! This crate defines the track records read from a music library export,
//! the `Library` and `Album` containers built on top of them, album
//! grouping, and the selection rules used to recommend albums for removal.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod model;
pub mod selection;

pub use error::{Error, Result};
pub use model::{Album, AlbumKey, GroupBy, Library, Track, TrackList};
pub use selection::Selection;
